//! Error types for the indra-grid crate.

/// Error type for all fallible operations in the indra-grid crate.
///
/// Shape and axis violations indicate a construction bug upstream, not a
/// data-quality issue, and are always raised to the caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GridError {
    /// Returned when a coordinate vector is empty.
    #[error("coordinate axis '{axis}' is empty")]
    EmptyAxis {
        /// Name of the offending axis.
        axis: &'static str,
    },

    /// Returned when the value cube does not match the coordinate axes.
    #[error(
        "value cube shape {got:?} does not match axes (time={n_time}, lat={n_lat}, lon={n_lon})"
    )]
    ShapeMismatch {
        /// Length of the time axis.
        n_time: usize,
        /// Length of the latitude axis.
        n_lat: usize,
        /// Length of the longitude axis.
        n_lon: usize,
        /// Actual shape of the value cube.
        got: [usize; 3],
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("time axis is not strictly increasing at index {index}")]
    UnsortedTime {
        /// Index of the first out-of-order timestamp.
        index: usize,
    },

    /// Returned when a season name cannot be parsed.
    #[error("unknown season '{name}' (expected winter, pre-monsoon, monsoon or post-monsoon)")]
    UnknownSeason {
        /// The unrecognised name.
        name: String,
    },
}
