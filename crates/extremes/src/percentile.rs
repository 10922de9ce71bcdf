//! Percentile-based indices: yearly totals above a wet-day quantile.

use chrono::Datelike;
use indra_grid::Grid;
use ndarray::Array3;
use rayon::prelude::*;
use tracing::debug;

use crate::error::ExtremesError;
use crate::threshold::{year_bins, year_end};

/// Days at or above this depth (mm) count as wet when deriving the
/// per-pixel quantile threshold.
pub const WET_DAY_MM: f64 = 1.0;

/// Per pixel: the total precipitation falling on days that exceed the
/// pixel's wet-day `percentile` threshold, summed per year (the R95p/R99p
/// convention for `percentile` 0.95/0.99).
///
/// The threshold is the type-7 quantile of wet-day (>= 1 mm) values within
/// the `reference` year range, defaulting to the full record. Pixels with
/// no wet reference day are missing throughout; a year with finite days
/// but no day above the threshold totals 0.
///
/// # Errors
///
/// - [`ExtremesError::InvalidPercentile`] if `percentile` is outside (0, 1).
/// - [`ExtremesError::NoReferenceOverlap`] if the reference range misses
///   the record entirely.
pub fn percentile_total(
    grid: &Grid,
    percentile: f64,
    reference: Option<(i32, i32)>,
) -> Result<Grid, ExtremesError> {
    if !(percentile > 0.0 && percentile < 1.0) {
        return Err(ExtremesError::InvalidPercentile { value: percentile });
    }

    let (start, end) = reference.unwrap_or_else(|| grid.year_range());
    let ref_indices: Vec<usize> = grid
        .time()
        .iter()
        .enumerate()
        .filter(|(_, d)| {
            let y = d.year();
            y >= start && y <= end
        })
        .map(|(t, _)| t)
        .collect();
    if ref_indices.is_empty() {
        return Err(ExtremesError::NoReferenceOverlap { start, end });
    }

    let bins = year_bins(grid);
    let years: Vec<i32> = bins.keys().copied().collect();
    let (_, n_lat, n_lon) = grid.shape();

    let columns: Vec<Vec<f64>> = (0..n_lat * n_lon)
        .into_par_iter()
        .map(|k| {
            let (i, j) = (k / n_lon, k % n_lon);

            let mut wet: Vec<f64> = ref_indices
                .iter()
                .map(|&t| grid.value(t, i, j))
                .filter(|v| v.is_finite() && *v >= WET_DAY_MM)
                .collect();
            if wet.is_empty() {
                return vec![f64::NAN; bins.len()];
            }
            wet.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let threshold = indra_stats::quantile_type7(&wet, percentile);

            bins.values()
                .map(|indices| {
                    let mut finite = 0usize;
                    let mut total = 0.0;
                    for &t in indices {
                        let v = grid.value(t, i, j);
                        if v.is_finite() {
                            finite += 1;
                            if v > threshold {
                                total += v;
                            }
                        }
                    }
                    if finite == 0 { f64::NAN } else { total }
                })
                .collect()
        })
        .collect();

    let dry_pixels = columns
        .iter()
        .filter(|c| c.iter().all(|v| v.is_nan()))
        .count();
    if dry_pixels > 0 {
        debug!(
            dry_pixels,
            total = n_lat * n_lon,
            "pixels without wet reference days"
        );
    }

    let mut values = Array3::from_elem((bins.len(), n_lat, n_lon), f64::NAN);
    for (k, column) in columns.iter().enumerate() {
        let (i, j) = (k / n_lon, k % n_lon);
        for (b, &v) in column.iter().enumerate() {
            values[[b, i, j]] = v;
        }
    }

    Ok(Grid::new(
        years.into_iter().map(year_end).collect(),
        grid.lat().to_vec(),
        grid.lon().to_vec(),
        values,
    )?)
}
