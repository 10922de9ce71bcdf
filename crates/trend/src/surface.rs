//! Pointwise trend surfaces over a spatial grid.

use indra_grid::Grid;
use ndarray::Array2;
use rayon::prelude::*;
use tracing::debug;

use crate::error::TrendError;
use crate::mann_kendall::{mann_kendall, MkTest};

/// Conventional significance level for the slope mask.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Per-pixel Mann-Kendall results: Sen's slope and p-value surfaces with
/// the source grid's coordinates. NaN marks pixels where the test was
/// undefined (all-missing or too-short series).
#[derive(Debug, Clone)]
pub struct TrendSurface {
    slope: Array2<f64>,
    p_value: Array2<f64>,
    lat: Vec<f64>,
    lon: Vec<f64>,
}

impl TrendSurface {
    /// Sen's slope per pixel (units of the input per timestep).
    pub fn slope(&self) -> &Array2<f64> {
        &self.slope
    }

    /// Two-sided p-value per pixel.
    pub fn p_value(&self) -> &Array2<f64> {
        &self.p_value
    }

    /// Latitude coordinates of the rows.
    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    /// Longitude coordinates of the columns.
    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    /// The significance-filtered slope surface: slope where `p <= alpha`,
    /// missing elsewhere. This is the externally consumed spatial-trend
    /// product.
    ///
    /// # Errors
    ///
    /// Returns [`TrendError::InvalidAlpha`] if `alpha` is outside (0, 1].
    pub fn significant_slope(&self, alpha: f64) -> Result<Array2<f64>, TrendError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(TrendError::InvalidAlpha { alpha });
        }
        Ok(Array2::from_shape_fn(self.slope.raw_dim(), |(i, j)| {
            let p = self.p_value[[i, j]];
            if p.is_finite() && p <= alpha {
                self.slope[[i, j]]
            } else {
                f64::NAN
            }
        }))
    }
}

/// Run the Mann-Kendall test independently at every (lat, lon) pixel.
///
/// Pixels are evaluated in parallel; each writes only its own output cell,
/// and a degenerate series at one pixel (all missing, too short) never
/// affects its siblings — it simply stays NaN in both surfaces.
pub fn pointwise_trend(grid: &Grid) -> TrendSurface {
    let (_, n_lat, n_lon) = grid.shape();

    let results: Vec<Option<MkTest>> = (0..n_lat * n_lon)
        .into_par_iter()
        .map(|k| mann_kendall(&grid.pixel_series(k / n_lon, k % n_lon)))
        .collect();

    let mut slope = Array2::from_elem((n_lat, n_lon), f64::NAN);
    let mut p_value = Array2::from_elem((n_lat, n_lon), f64::NAN);
    let mut undefined = 0usize;

    for (k, result) in results.iter().enumerate() {
        let (i, j) = (k / n_lon, k % n_lon);
        match result {
            Some(test) => {
                slope[[i, j]] = test.slope;
                p_value[[i, j]] = test.p_value;
            }
            None => undefined += 1,
        }
    }

    if undefined > 0 {
        debug!(
            undefined,
            total = n_lat * n_lon,
            "pixels without a defined trend"
        );
    }

    TrendSurface {
        slope,
        p_value,
        lat: grid.lat().to_vec(),
        lon: grid.lon().to_vec(),
    }
}
