//! Immutable gridded precipitation time series over (time, lat, lon).
//!
//! A [`Grid`] is created once by an external loader (see the indra-io
//! crate) and then re-derived, never mutated: temporal resampling
//! ([`Grid::aggregate`]), hydrological-year relabeling
//! ([`Grid::hydrological_year_shift`]), region masking
//! ([`Grid::clip_to_region`]) and time selection each return a new grid.
//! Missing values are NaN and stay missing through every derivation.
//!
//! # Quick start
//!
//! ```no_run
//! use indra_grid::{AggOp, Grid, Resolution};
//!
//! # fn demo(daily: Grid) {
//! let monthly = daily.aggregate(Resolution::Monthly, AggOp::Sum);
//! let winter = monthly.select_months(&[12, 1, 2]);
//! # }
//! ```

mod aggregate;
mod clip;
mod error;
mod grid;
mod hydro;
mod season;
mod select;

pub use aggregate::{AggOp, Resolution};
pub use error::GridError;
pub use grid::Grid;
pub use season::Season;
