//! Time-axis selection.
//!
//! All selections return `None` when the request has no overlap with the
//! time axis; a missing window is an explicit "no data" result, never an
//! extrapolated or zero-filled grid.

use chrono::{Datelike, NaiveDate};

use crate::grid::Grid;

impl Grid {
    /// Restrict to timesteps within `[start, end]` (inclusive).
    pub fn select_dates(&self, start: NaiveDate, end: NaiveDate) -> Option<Grid> {
        let indices: Vec<usize> = self
            .time()
            .iter()
            .enumerate()
            .filter(|(_, d)| **d >= start && **d <= end)
            .map(|(t, _)| t)
            .collect();
        if indices.is_empty() {
            None
        } else {
            Some(self.subset_time(&indices))
        }
    }

    /// Restrict to timesteps whose calendar month is in `months` (1..=12).
    /// Used for seasonal windows.
    pub fn select_months(&self, months: &[u8]) -> Option<Grid> {
        let indices: Vec<usize> = self
            .time()
            .iter()
            .enumerate()
            .filter(|(_, d)| months.contains(&(d.month() as u8)))
            .map(|(t, _)| t)
            .collect();
        if indices.is_empty() {
            None
        } else {
            Some(self.subset_time(&indices))
        }
    }

    /// Restrict to timesteps whose calendar year is within
    /// `[start_year, end_year]` (inclusive).
    pub fn select_years(&self, start_year: i32, end_year: i32) -> Option<Grid> {
        let indices: Vec<usize> = self
            .time()
            .iter()
            .enumerate()
            .filter(|(_, d)| {
                let y = d.year();
                y >= start_year && y <= end_year
            })
            .map(|(t, _)| t)
            .collect();
        if indices.is_empty() {
            None
        } else {
            Some(self.subset_time(&indices))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn monthly_grid() -> Grid {
        let time: Vec<NaiveDate> = (1..=12).map(|m| date(2000, m, 15)).collect();
        let vals: Vec<f64> = (1..=12).map(|m| m as f64).collect();
        let values = Array3::from_shape_vec((12, 1, 1), vals).expect("shape");
        Grid::new(time, vec![27.0], vec![84.0], values).expect("valid grid")
    }

    #[test]
    fn select_dates_inclusive() {
        let g = monthly_grid();
        let sel = g
            .select_dates(date(2000, 3, 15), date(2000, 5, 15))
            .expect("overlap");
        assert_eq!(sel.n_time(), 3);
        assert_eq!(sel.value(0, 0, 0), 3.0);
        assert_eq!(sel.value(2, 0, 0), 5.0);
    }

    #[test]
    fn select_dates_no_overlap_is_none() {
        let g = monthly_grid();
        assert!(g.select_dates(date(2050, 1, 1), date(2051, 1, 1)).is_none());
    }

    #[test]
    fn select_months_seasonal_window() {
        let g = monthly_grid();
        let sel = g.select_months(&[6, 7, 8, 9]).expect("overlap");
        assert_eq!(sel.n_time(), 4);
        assert_eq!(sel.value(0, 0, 0), 6.0);
        assert_eq!(sel.value(3, 0, 0), 9.0);
    }

    #[test]
    fn select_months_empty_set_is_none() {
        let g = monthly_grid();
        assert!(g.select_months(&[]).is_none());
    }

    #[test]
    fn select_years_window() {
        let time = vec![date(1999, 6, 1), date(2000, 6, 1), date(2001, 6, 1)];
        let values = Array3::from_shape_vec((3, 1, 1), vec![1.0, 2.0, 3.0]).expect("shape");
        let g = Grid::new(time, vec![27.0], vec![84.0], values).unwrap();

        let sel = g.select_years(2000, 2000).expect("overlap");
        assert_eq!(sel.n_time(), 1);
        assert_eq!(sel.value(0, 0, 0), 2.0);
        assert!(g.select_years(1990, 1995).is_none());
    }
}
