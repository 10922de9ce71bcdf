//! Threshold-based indices: yearly counts of days at or above a depth.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use indra_grid::Grid;
use ndarray::Array3;

use crate::error::ExtremesError;

/// Yearly time indices of a grid, in chronological order.
pub(crate) fn year_bins(grid: &Grid) -> BTreeMap<i32, Vec<usize>> {
    let mut bins: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (t, date) in grid.time().iter().enumerate() {
        bins.entry(date.year()).or_default().push(t);
    }
    bins
}

pub(crate) fn year_end(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 12, 31).expect("December 31 exists in every year")
}

/// Count, per pixel and per year, the days with precipitation at or above
/// `threshold` (mm). R1mm / R10mm / R20mm for thresholds 1, 10 and 20.
///
/// Missing days are skipped; a year with no finite day at a pixel is
/// missing there. The result is a yearly grid (December 31 labels) ready
/// for the trend engine.
///
/// # Errors
///
/// Returns [`ExtremesError::InvalidThreshold`] for a negative or
/// non-finite threshold.
pub fn count_days_above(grid: &Grid, threshold: f64) -> Result<Grid, ExtremesError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ExtremesError::InvalidThreshold { value: threshold });
    }

    let bins = year_bins(grid);
    let (_, n_lat, n_lon) = grid.shape();
    let mut time = Vec::with_capacity(bins.len());
    let mut values = Array3::from_elem((bins.len(), n_lat, n_lon), f64::NAN);

    for (b, (&year, indices)) in bins.iter().enumerate() {
        time.push(year_end(year));
        for i in 0..n_lat {
            for j in 0..n_lon {
                let mut finite = 0usize;
                let mut count = 0usize;
                for &t in indices {
                    let v = grid.value(t, i, j);
                    if v.is_finite() {
                        finite += 1;
                        if v >= threshold {
                            count += 1;
                        }
                    }
                }
                if finite > 0 {
                    values[[b, i, j]] = count as f64;
                }
            }
        }
    }

    Ok(Grid::new(
        time,
        grid.lat().to_vec(),
        grid.lon().to_vec(),
        values,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn daily(vals: Vec<f64>, start: NaiveDate) -> Grid {
        let mut time = Vec::with_capacity(vals.len());
        let mut d = start;
        for _ in 0..vals.len() {
            time.push(d);
            d = d.succ_opt().expect("valid successor");
        }
        let n = vals.len();
        let values = Array3::from_shape_vec((n, 1, 1), vals).expect("shape");
        Grid::new(time, vec![27.0], vec![84.0], values).expect("valid grid")
    }

    #[test]
    fn counts_days_at_or_above() {
        let g = daily(
            vec![0.0, 0.5, 1.0, 12.0, 25.0, f64::NAN],
            date(2000, 1, 1),
        );
        let r1 = count_days_above(&g, 1.0).unwrap();
        assert_relative_eq!(r1.value(0, 0, 0), 3.0);
        let r10 = count_days_above(&g, 10.0).unwrap();
        assert_relative_eq!(r10.value(0, 0, 0), 2.0);
        let r20 = count_days_above(&g, 20.0).unwrap();
        assert_relative_eq!(r20.value(0, 0, 0), 1.0);
    }

    #[test]
    fn bins_by_calendar_year() {
        let g = daily(vec![5.0, 5.0, 5.0], date(2000, 12, 30));
        let r = count_days_above(&g, 1.0).unwrap();
        assert_eq!(r.time(), &[date(2000, 12, 31), date(2001, 12, 31)]);
        assert_relative_eq!(r.value(0, 0, 0), 2.0);
        assert_relative_eq!(r.value(1, 0, 0), 1.0);
    }

    #[test]
    fn all_missing_year_is_missing() {
        let g = daily(vec![f64::NAN, f64::NAN], date(2000, 6, 1));
        let r = count_days_above(&g, 1.0).unwrap();
        assert!(r.value(0, 0, 0).is_nan());
    }

    #[test]
    fn negative_threshold_rejected() {
        let g = daily(vec![1.0, 2.0, 3.0], date(2000, 1, 1));
        assert!(matches!(
            count_days_above(&g, -1.0),
            Err(ExtremesError::InvalidThreshold { .. })
        ));
        assert!(matches!(
            count_days_above(&g, f64::NAN),
            Err(ExtremesError::InvalidThreshold { .. })
        ));
    }
}
