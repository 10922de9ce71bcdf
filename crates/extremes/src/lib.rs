//! Extreme precipitation indices over a daily grid.
//!
//! Each index reduces a daily record to a yearly grid per pixel, suitable
//! for direct input to the trend engine:
//!
//! - [`count_days_above`] — days at or above a fixed depth per year
//!   (R1mm, R10mm, R20mm)
//! - [`percentile_total`] — yearly precipitation total on days exceeding
//!   the pixel's wet-day quantile threshold (R95p, R99p)

mod error;
mod percentile;
mod threshold;

pub use error::ExtremesError;
pub use percentile::{percentile_total, WET_DAY_MM};
pub use threshold::count_days_above;
