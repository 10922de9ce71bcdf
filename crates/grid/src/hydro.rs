//! Hydrological-year relabeling of the time axis.

use chrono::{Datelike, NaiveDate};
use ndarray::{Array3, Axis};
use tracing::debug;

use crate::grid::Grid;

impl Grid {
    /// Relabel December timestamps to the following year, so a season
    /// spanning the calendar boundary (Dec-Feb) falls in a single yearly
    /// bin: 1999-12-15 becomes 2000-12-15 and groups with Jan/Feb 2000.
    ///
    /// Records whose shifted year would lie beyond `today`'s year are
    /// dropped, and the result is re-sorted ascending by time. `today` is
    /// an explicit parameter so callers (and tests) control the clock.
    pub fn hydrological_year_shift(&self, today: NaiveDate) -> Grid {
        let mut shifted: Vec<(NaiveDate, usize)> = Vec::with_capacity(self.n_time());
        let mut dropped = 0usize;

        for (t, date) in self.time().iter().enumerate() {
            let relabeled = if date.month() == 12 {
                date.with_year(date.year() + 1)
                    .expect("December dates exist in every year")
            } else {
                *date
            };
            if relabeled.year() > today.year() {
                dropped += 1;
                continue;
            }
            shifted.push((relabeled, t));
        }

        if dropped > 0 {
            debug!(dropped, "dropped records with shifted year beyond today");
        }

        shifted.sort_by_key(|&(date, _)| date);

        let time: Vec<NaiveDate> = shifted.iter().map(|&(d, _)| d).collect();
        let (_, n_lat, n_lon) = self.shape();
        let mut values = Array3::from_elem((time.len(), n_lat, n_lon), f64::NAN);
        for (out_t, &(_, t)) in shifted.iter().enumerate() {
            values
                .index_axis_mut(Axis(0), out_t)
                .assign(&self.values().index_axis(Axis(0), t));
        }

        self.with_time(time, values)
    }
}
