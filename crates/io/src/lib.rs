//! NetCDF archive loading and result writing.
//!
//! This crate is the collaborator that hands validated [`indra_grid::Grid`]
//! values to the engines: it decodes CF time axes, resolves the archive's
//! missing-value sentinel to NaN before handoff, and writes derived
//! surfaces and fields back out as self-describing NetCDF.

mod error;
mod read;
mod write;

pub use error::IoError;
pub use read::{read_precipitation_grid, LoaderConfig};
pub use write::{write_field, write_surface};
