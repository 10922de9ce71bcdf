//! Error types for the indra-io crate.

use std::path::PathBuf;

use indra_grid::GridError;

/// Error type for all fallible operations in the indra-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input path does not exist on disk.
    #[error("file not found: {path}")]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Returned when none of a variable's aliases is present in the file.
    #[error("variable '{name}' not found in {path}")]
    MissingVariable {
        /// First alias tried.
        name: String,
        /// The file searched.
        path: PathBuf,
    },

    /// Returned when a required attribute is absent or of the wrong type.
    #[error("attribute '{name}' missing or malformed in {path}")]
    MissingAttribute {
        /// Attribute name.
        name: String,
        /// The file searched.
        path: PathBuf,
    },

    /// Returned when a variable has unexpected dimensions.
    #[error("dimension mismatch for {name}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Description of the checked variable.
        name: String,
        /// Expected dimension count or length.
        expected: usize,
        /// Actual dimension count or length.
        got: usize,
    },

    /// Returned when the time coordinate cannot be decoded.
    #[error("invalid time coordinate: {reason}")]
    InvalidTime {
        /// Description of the problem.
        reason: String,
    },

    /// Underlying NetCDF library failure.
    #[error(transparent)]
    Netcdf(#[from] netcdf::Error),

    /// Propagated grid construction failure.
    #[error(transparent)]
    Grid(#[from] GridError),
}
