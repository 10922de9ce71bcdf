//! Non-parametric monotonic trend detection for precipitation grids.
//!
//! Implements the Mann-Kendall test with the standard tie-corrected
//! variance, continuity-corrected normal approximation and Sen's slope
//! estimator, applied either to a single series ([`series_trend`]) or
//! pointwise across a spatial grid ([`pointwise_trend`]).
//!
//! # Glossary
//!
//! - **S**: sum of `sign(x_j - x_i)` over all ordered pairs `i < j`
//! - **Sen's slope**: median of all pairwise rate estimates, robust to
//!   outliers and non-normality
//! - **Significance mask**: slope kept only where `p <= alpha`
//!
//! # Quick start
//!
//! ```
//! use indra_trend::{series_trend, TrendLabel};
//!
//! let annual_totals = [710.0, 742.0, 760.0, 785.0, 801.0, 833.0];
//! let test = series_trend(&annual_totals).expect("enough samples");
//! assert_eq!(test.label, TrendLabel::Increasing);
//! ```

mod error;
mod mann_kendall;
mod sen;
mod surface;

pub use error::TrendError;
pub use mann_kendall::{mann_kendall, MkTest, TrendLabel, MIN_SAMPLES};
pub use surface::{pointwise_trend, TrendSurface, DEFAULT_ALPHA};

/// Trend test for a single 1-D series (e.g. a spatially-averaged annual or
/// seasonal series). Requires at least [`MIN_SAMPLES`] non-missing points;
/// callers must treat `None` as "insufficient data" and skip slope
/// reporting rather than substituting a default.
pub fn series_trend(series: &[f64]) -> Option<MkTest> {
    mann_kendall(series)
}
