//! Temporal resampling of a grid into calendar bins.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use ndarray::Array3;

use crate::grid::Grid;

/// Target temporal resolution for [`Grid::aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No binning; aggregation at daily resolution is the identity.
    Daily,
    /// Calendar-month bins labeled with the last day of the month.
    Monthly,
    /// Calendar-year bins labeled with December 31.
    Yearly,
}

/// Reduction applied within each calendar bin. All ops skip missing values;
/// a bin with no finite sample yields missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggOp {
    /// Accumulated depth (precipitation totals).
    #[default]
    Sum,
    /// Bin mean.
    Mean,
    /// Bin maximum (e.g. wettest day of the year).
    Max,
}

impl AggOp {
    fn reduce(self, values: &[f64]) -> f64 {
        match self {
            AggOp::Sum => indra_stats::nan_sum(values),
            AggOp::Mean => indra_stats::nan_mean(values),
            AggOp::Max => indra_stats::nan_max(values),
        }
    }
}

/// Last day of a calendar month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .expect("first of month has a predecessor")
}

impl Grid {
    /// Re-derive the grid at a coarser temporal resolution.
    ///
    /// Groups timesteps into calendar bins, reduces each bin per pixel with
    /// `op` skipping missing values, and labels each bin with its closing
    /// boundary (last day of month, or December 31 for years). A bin that
    /// is entirely missing at a pixel stays missing there.
    pub fn aggregate(&self, resolution: Resolution, op: AggOp) -> Grid {
        if resolution == Resolution::Daily {
            return self.clone();
        }

        // (year, month-or-zero) -> time indices; BTreeMap keeps bins in
        // chronological order because the time axis is sorted.
        let mut bins: BTreeMap<(i32, u32), Vec<usize>> = BTreeMap::new();
        for (t, date) in self.time().iter().enumerate() {
            let key = match resolution {
                Resolution::Monthly => (date.year(), date.month()),
                Resolution::Yearly => (date.year(), 0),
                Resolution::Daily => unreachable!(),
            };
            bins.entry(key).or_default().push(t);
        }

        let (_, n_lat, n_lon) = self.shape();
        let n_bins = bins.len();
        let mut time = Vec::with_capacity(n_bins);
        let mut values = Array3::from_elem((n_bins, n_lat, n_lon), f64::NAN);

        for (b, (&(year, month), indices)) in bins.iter().enumerate() {
            time.push(match resolution {
                Resolution::Monthly => last_day_of_month(year, month),
                Resolution::Yearly => last_day_of_month(year, 12),
                Resolution::Daily => unreachable!(),
            });

            let mut scratch = Vec::with_capacity(indices.len());
            for i in 0..n_lat {
                for j in 0..n_lon {
                    scratch.clear();
                    scratch.extend(indices.iter().map(|&t| self.value(t, i, j)));
                    values[[b, i, j]] = op.reduce(&scratch);
                }
            }
        }

        self.with_time(time, values)
    }
}
