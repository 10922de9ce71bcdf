//! Integration tests for pointwise trend surfaces on synthetic grids.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use indra_grid::Grid;
use indra_trend::{pointwise_trend, series_trend, TrendLabel, DEFAULT_ALPHA};
use ndarray::Array3;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// 2x2 grid over 30 years: a strongly increasing pixel, a constant pixel,
/// an all-missing pixel and a strongly decreasing pixel.
fn mixed_grid() -> Grid {
    let n_years = 30;
    let time: Vec<NaiveDate> = (0..n_years)
        .map(|k| date(1981 + k as i32, 12, 31))
        .collect();
    let mut values = Array3::from_elem((n_years, 2, 2), f64::NAN);
    for t in 0..n_years {
        values[[t, 0, 0]] = 500.0 + 10.0 * t as f64; // increasing
        values[[t, 0, 1]] = 650.0; // constant
        // (1, 0) stays all-NaN
        values[[t, 1, 1]] = 900.0 - 5.0 * t as f64; // decreasing
    }
    Grid::new(time, vec![27.0, 28.0], vec![84.0, 85.0], values).expect("valid grid")
}

#[test]
fn significance_mask_keeps_only_trending_pixels() {
    let surface = pointwise_trend(&mixed_grid());
    let masked = surface.significant_slope(DEFAULT_ALPHA).expect("valid alpha");

    assert_relative_eq!(masked[[0, 0]], 10.0);
    assert_relative_eq!(masked[[1, 1]], -5.0);
    assert!(masked[[0, 1]].is_nan(), "constant pixel must be masked");
    assert!(masked[[1, 0]].is_nan(), "all-missing pixel must be masked");
}

#[test]
fn all_missing_pixel_undefined_in_both_surfaces() {
    let surface = pointwise_trend(&mixed_grid());
    assert!(surface.slope()[[1, 0]].is_nan());
    assert!(surface.p_value()[[1, 0]].is_nan());
}

#[test]
fn constant_pixel_has_p_one_and_zero_slope() {
    let surface = pointwise_trend(&mixed_grid());
    assert_relative_eq!(surface.slope()[[0, 1]], 0.0);
    assert_relative_eq!(surface.p_value()[[0, 1]], 1.0);
}

#[test]
fn corrupt_pixel_does_not_disturb_neighbors() {
    // Same grid, but with one pixel corrupted to all-NaN: every other
    // pixel's result must be bit-identical to the clean run.
    let clean = mixed_grid();
    let mut values = clean.values().clone();
    for t in 0..clean.n_time() {
        values[[t, 1, 1]] = f64::NAN;
    }
    let corrupted = Grid::new(
        clean.time().to_vec(),
        clean.lat().to_vec(),
        clean.lon().to_vec(),
        values,
    )
    .expect("valid grid");

    let a = pointwise_trend(&clean);
    let b = pointwise_trend(&corrupted);

    for (i, j) in [(0, 0), (0, 1), (1, 0)] {
        let (sa, sb) = (a.slope()[[i, j]], b.slope()[[i, j]]);
        assert!(
            sa == sb || (sa.is_nan() && sb.is_nan()),
            "slope changed at ({i},{j}): {sa} vs {sb}"
        );
        let (pa, pb) = (a.p_value()[[i, j]], b.p_value()[[i, j]]);
        assert!(
            pa == pb || (pa.is_nan() && pb.is_nan()),
            "p changed at ({i},{j}): {pa} vs {pb}"
        );
    }
    assert!(b.slope()[[1, 1]].is_nan());
}

#[test]
fn surface_agrees_with_series_test() {
    let grid = mixed_grid();
    let surface = pointwise_trend(&grid);
    let series = grid.pixel_series(0, 0);
    let single = series_trend(&series).expect("defined");

    assert_relative_eq!(surface.slope()[[0, 0]], single.slope);
    assert_relative_eq!(surface.p_value()[[0, 0]], single.p_value);
    assert_eq!(single.label, TrendLabel::Increasing);
}

#[test]
fn area_mean_series_trend() {
    // Spatial mean of the mixed grid still trends upward:
    // (500 + 10t + 650 + 900 - 5t) / 3 has slope 5/3 per year.
    let grid = mixed_grid();
    let mean_series = grid.spatial_mean();
    let test = series_trend(&mean_series).expect("defined");
    assert_eq!(test.label, TrendLabel::Increasing);
    assert_relative_eq!(test.slope, 5.0 / 3.0, epsilon = 1e-9);
}
