//! The core gridded time-series type.

use chrono::{Datelike, NaiveDate};
use ndarray::{Array3, Axis};

use crate::error::GridError;

/// An immutable 3-D precipitation field over (time, lat, lon).
///
/// The time axis is strictly increasing; latitude and longitude are fixed
/// for the lifetime of the grid. Missing values are NaN and propagate
/// through every derived grid unless an operation explicitly defines a
/// missing-data policy (aggregation sums skip missing within a bin).
///
/// Grids are re-derived, never mutated: resampling, masking and selection
/// all return a new `Grid`.
#[derive(Debug, Clone)]
pub struct Grid {
    time: Vec<NaiveDate>,
    lat: Vec<f64>,
    lon: Vec<f64>,
    values: Array3<f64>,
}

impl Grid {
    /// Create a grid after validating the axis invariants.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyAxis`] if any coordinate vector is empty.
    /// - [`GridError::ShapeMismatch`] if `values.shape()` is not
    ///   `(time.len(), lat.len(), lon.len())`.
    /// - [`GridError::UnsortedTime`] if timestamps are not strictly
    ///   increasing (duplicates included).
    pub fn new(
        time: Vec<NaiveDate>,
        lat: Vec<f64>,
        lon: Vec<f64>,
        values: Array3<f64>,
    ) -> Result<Self, GridError> {
        if time.is_empty() {
            return Err(GridError::EmptyAxis { axis: "time" });
        }
        if lat.is_empty() {
            return Err(GridError::EmptyAxis { axis: "lat" });
        }
        if lon.is_empty() {
            return Err(GridError::EmptyAxis { axis: "lon" });
        }

        let shape = values.shape();
        if shape != [time.len(), lat.len(), lon.len()] {
            return Err(GridError::ShapeMismatch {
                n_time: time.len(),
                n_lat: lat.len(),
                n_lon: lon.len(),
                got: [shape[0], shape[1], shape[2]],
            });
        }

        if let Some(index) = time.windows(2).position(|w| w[1] <= w[0]) {
            return Err(GridError::UnsortedTime { index: index + 1 });
        }

        Ok(Self {
            time,
            lat,
            lon,
            values,
        })
    }

    /// Number of timesteps.
    pub fn n_time(&self) -> usize {
        self.time.len()
    }

    /// Number of latitude rows.
    pub fn n_lat(&self) -> usize {
        self.lat.len()
    }

    /// Number of longitude columns.
    pub fn n_lon(&self) -> usize {
        self.lon.len()
    }

    /// Shape as `(n_time, n_lat, n_lon)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.time.len(), self.lat.len(), self.lon.len())
    }

    /// The time coordinate vector.
    pub fn time(&self) -> &[NaiveDate] {
        &self.time
    }

    /// The latitude coordinate vector.
    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    /// The longitude coordinate vector.
    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    /// The full value cube, indexed `(t, i, j)`.
    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    /// Value at `(t, i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn value(&self, t: usize, i: usize, j: usize) -> f64 {
        self.values[[t, i, j]]
    }

    /// The 1-D time series at pixel `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn pixel_series(&self, i: usize, j: usize) -> Vec<f64> {
        (0..self.time.len())
            .map(|t| self.values[[t, i, j]])
            .collect()
    }

    /// Calendar month (1..=12) of each timestep.
    pub fn month_of_year(&self) -> Vec<u8> {
        self.time.iter().map(|d| d.month() as u8).collect()
    }

    /// First and last calendar year on the time axis.
    pub fn year_range(&self) -> (i32, i32) {
        // new() guarantees a non-empty, sorted time axis
        (
            self.time[0].year(),
            self.time[self.time.len() - 1].year(),
        )
    }

    /// Area-mean series: for each timestep, the mean over all pixels
    /// skipping missing values. A timestep with no finite pixel is NaN.
    pub fn spatial_mean(&self) -> Vec<f64> {
        (0..self.time.len())
            .map(|t| {
                let slab = self.values.index_axis(Axis(0), t);
                let vals: Vec<f64> = slab.iter().copied().collect();
                indra_stats::nan_mean(&vals)
            })
            .collect()
    }

    /// Mutable view of the value cube, for in-crate masking only.
    pub(crate) fn values_mut(&mut self) -> &mut Array3<f64> {
        &mut self.values
    }

    /// Build a new grid from a subset of time indices (ascending).
    pub(crate) fn subset_time(&self, indices: &[usize]) -> Self {
        let time: Vec<NaiveDate> = indices.iter().map(|&t| self.time[t]).collect();
        let mut values = Array3::zeros((indices.len(), self.lat.len(), self.lon.len()));
        for (out_t, &t) in indices.iter().enumerate() {
            values
                .index_axis_mut(Axis(0), out_t)
                .assign(&self.values.index_axis(Axis(0), t));
        }
        Self {
            time,
            lat: self.lat.clone(),
            lon: self.lon.clone(),
            values,
        }
    }

    /// Replace the time axis and value cube, keeping the spatial axes.
    /// Caller guarantees the new axis is sorted and shape-consistent.
    pub(crate) fn with_time(&self, time: Vec<NaiveDate>, values: Array3<f64>) -> Self {
        debug_assert_eq!(values.shape()[0], time.len());
        debug_assert_eq!(values.shape()[1], self.lat.len());
        debug_assert_eq!(values.shape()[2], self.lon.len());
        Self {
            time,
            lat: self.lat.clone(),
            lon: self.lon.clone(),
            values,
        }
    }
}
