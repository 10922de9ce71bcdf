//! Integration tests for grid-wide SPI computation.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use indra_grid::Grid;
use indra_spi::{compute_spi, SpiConfig, SpiError};
use ndarray::Array3;
use rand::SeedableRng;
use rand_distr::{Distribution, Gamma as GammaDist};

fn month_end(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .expect("valid date")
}

/// Monthly time axis covering `n_years` starting in `start_year`.
fn monthly_axis(start_year: i32, n_years: usize) -> Vec<NaiveDate> {
    (0..n_years * 12)
        .map(|t| month_end(start_year + (t / 12) as i32, (t % 12) as u32 + 1))
        .collect()
}

/// 2x2 monthly grid of Gamma(2, 3) samples over 40 years.
fn synthetic_monthly() -> Grid {
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);
    let dist = GammaDist::new(2.0, 3.0).unwrap();
    let n_years = 40;
    let time = monthly_axis(1981, n_years);
    let n = time.len();
    let values = Array3::from_shape_fn((n, 2, 2), |_| dist.sample(&mut rng));
    Grid::new(time, vec![27.0, 28.0], vec![84.0, 85.0], values).expect("valid grid")
}

#[test]
fn field_has_input_shape_and_axis() {
    let monthly = synthetic_monthly();
    let field = compute_spi(&monthly, &SpiConfig::new().with_scale(3)).expect("monthly");
    assert_eq!(field.shape(), monthly.shape());
    assert_eq!(field.time(), monthly.time());
    assert_eq!(field.lat(), monthly.lat());
    assert_eq!(field.lon(), monthly.lon());
}

#[test]
fn calibration_period_is_standardized() {
    let monthly = synthetic_monthly();
    let field = compute_spi(&monthly, &SpiConfig::new().with_scale(1)).expect("monthly");
    for i in 0..2 {
        for j in 0..2 {
            let series = field.pixel_series(i, j);
            assert_relative_eq!(indra_stats::nan_mean(&series), 0.0, epsilon = 0.05);
            assert_relative_eq!(indra_stats::sd(&series), 1.0, epsilon = 0.1);
        }
    }
}

#[test]
fn leading_scale_window_is_missing() {
    let monthly = synthetic_monthly();
    let field = compute_spi(&monthly, &SpiConfig::new().with_scale(12)).expect("monthly");
    for t in 0..11 {
        assert!(field.value(t, 0, 0).is_nan(), "t={t} should be missing");
    }
    assert!(field.value(11, 0, 0).is_finite());
}

#[test]
fn corrupt_pixel_is_isolated() {
    let monthly = synthetic_monthly();
    let mut values = monthly.values().clone();
    for t in 0..monthly.n_time() {
        values[[t, 0, 1]] = f64::NAN;
    }
    let corrupted = Grid::new(
        monthly.time().to_vec(),
        monthly.lat().to_vec(),
        monthly.lon().to_vec(),
        values,
    )
    .expect("valid grid");

    let config = SpiConfig::new().with_scale(3);
    let clean_field = compute_spi(&monthly, &config).expect("monthly");
    let dirty_field = compute_spi(&corrupted, &config).expect("must not raise");

    // The corrupted pixel is all-missing; every other pixel is identical.
    assert!(dirty_field.pixel_series(0, 1).iter().all(|v| v.is_nan()));
    for (i, j) in [(0, 0), (1, 0), (1, 1)] {
        let a = clean_field.pixel_series(i, j);
        let b = dirty_field.pixel_series(i, j);
        for (t, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!(
                x == y || (x.is_nan() && y.is_nan()),
                "pixel ({i},{j}) changed at t={t}: {x} vs {y}"
            );
        }
    }
}

#[test]
fn daily_axis_rejected() {
    let time: Vec<NaiveDate> = (1..=28)
        .map(|d| NaiveDate::from_ymd_opt(2000, 1, d).unwrap())
        .collect();
    let values = Array3::from_elem((28, 1, 1), 1.0);
    let daily = Grid::new(time, vec![27.0], vec![84.0], values).unwrap();
    let r = compute_spi(&daily, &SpiConfig::new());
    assert!(matches!(r, Err(SpiError::NotMonthly { .. })));
}

#[test]
fn monthly_axis_with_gap_rejected() {
    let mut time = monthly_axis(2000, 1);
    time.remove(5);
    let values = Array3::from_elem((11, 1, 1), 1.0);
    let gappy = Grid::new(time, vec![27.0], vec![84.0], values).unwrap();
    let r = compute_spi(&gappy, &SpiConfig::new());
    assert!(matches!(r, Err(SpiError::NotMonthly { .. })));
}

#[test]
fn invalid_scale_rejected() {
    let monthly = synthetic_monthly();
    let r = compute_spi(&monthly, &SpiConfig::new().with_scale(0));
    assert!(matches!(r, Err(SpiError::InvalidConfig { .. })));
}
