//! Standardized Precipitation Index over a monthly precipitation grid.
//!
//! Converts monthly accumulations into a dimensionless drought index at a
//! chosen scale, fitting a mixed zero/Gamma distribution per pixel and
//! calendar month and transforming through the inverse standard normal.
//!
//! # Pipeline
//!
//! 1. **Roll** each pixel series into `scale`-month sums (leading
//!    `scale - 1` steps stay missing)
//! 2. **Group** the rolled series by calendar month-of-year
//! 3. **Fit** a Gamma to each group's positive values (Thom approximate
//!    MLE) with probability mass `q` at zero: `F(x) = q + (1-q)G(x)`
//! 4. **Transform** each value through the probit of its CDF and clamp to
//!    the fitted-index validity range
//!
//! The calibration window is the full record span — the fit uses the
//! entire available record rather than a held-out reference period. This
//! is a domain policy inherited from the source record's processing chain;
//! changing it changes the meaning of the statistic.
//!
//! # Glossary
//!
//! - **SPI**: Standardized Precipitation Index, a z-score describing how
//!   anomalous an accumulated total is for that calendar period
//! - **Scale**: number of consecutive months summed before standardization
//! - **probit**: inverse CDF of the standard normal
//!
//! # Quick start
//!
//! ```no_run
//! use indra_grid::Grid;
//! use indra_spi::{compute_spi, SpiConfig};
//!
//! # fn demo(monthly: Grid) {
//! let config = SpiConfig::new().with_scale(12);
//! let field = compute_spi(&monthly, &config).expect("monthly input");
//! # }
//! ```

mod classify;
mod config;
mod error;
pub(crate) mod gamma;
pub(crate) mod rolling;
pub(crate) mod transform;

pub use classify::SpiClass;
pub use config::{FitMethod, SpiConfig};
pub use error::SpiError;
pub use gamma::GammaParams;

use chrono::Datelike;
use indra_grid::Grid;
use ndarray::Array3;
use rayon::prelude::*;
use tracing::{debug, info};

/// Validates that the grid's time axis is a contiguous monthly series and
/// returns the calendar month of each step.
fn validate_monthly(grid: &Grid) -> Result<Vec<u8>, SpiError> {
    let time = grid.time();
    for w in time.windows(2) {
        let a = w[0].year() * 12 + w[0].month() as i32 - 1;
        let b = w[1].year() * 12 + w[1].month() as i32 - 1;
        if b != a + 1 {
            return Err(SpiError::NotMonthly {
                reason: format!("gap between {} and {}", w[0], w[1]),
            });
        }
    }
    Ok(grid.month_of_year())
}

/// Compute the SPI field for a monthly precipitation grid.
///
/// The output grid has the same time axis (the leading rolling-window
/// misalignment produces missing values rather than shrinking the axis)
/// and the same spatial shape as the input. Per-pixel fit failures are
/// contained: the affected pixel/month stays missing while every other
/// pixel is computed.
///
/// # Errors
///
/// - [`SpiError::InvalidConfig`] for a rejected configuration.
/// - [`SpiError::NotMonthly`] if the time axis is not contiguous calendar
///   months.
pub fn compute_spi(grid: &Grid, config: &SpiConfig) -> Result<Grid, SpiError> {
    config.validate()?;
    let months = validate_monthly(grid)?;

    let (n_time, n_lat, n_lon) = grid.shape();
    let (start_year, end_year) = grid.year_range();
    info!(
        scale = config.scale(),
        start_year,
        end_year,
        "computing SPI with full-record calibration window"
    );

    let columns: Vec<(Vec<f64>, usize)> = (0..n_lat * n_lon)
        .into_par_iter()
        .map(|k| {
            let series = grid.pixel_series(k / n_lon, k % n_lon);
            if indra_stats::count_finite(&series) == 0 {
                // Fully-missing pixel: all-missing output, not a failure.
                (vec![f64::NAN; n_time], 0)
            } else {
                transform::spi_series(&series, &months, config)
            }
        })
        .collect();

    let mut values = Array3::from_elem((n_time, n_lat, n_lon), f64::NAN);
    let mut failed_groups = 0usize;
    for (k, (column, failed)) in columns.iter().enumerate() {
        let (i, j) = (k / n_lon, k % n_lon);
        failed_groups += failed;
        for (t, &v) in column.iter().enumerate() {
            values[[t, i, j]] = v;
        }
    }

    if failed_groups > 0 {
        debug!(
            failed_groups,
            pixels = n_lat * n_lon,
            "calendar-month groups left missing after fit failure"
        );
    }

    Ok(Grid::new(
        grid.time().to_vec(),
        grid.lat().to_vec(),
        grid.lon().to_vec(),
        values,
    )?)
}
