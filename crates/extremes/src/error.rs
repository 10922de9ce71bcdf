//! Error types for the indra-extremes crate.

use indra_grid::GridError;

/// Error type for all fallible operations in the indra-extremes crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ExtremesError {
    /// Returned when a precipitation threshold is negative or non-finite.
    #[error("invalid threshold: {value} mm (must be finite and non-negative)")]
    InvalidThreshold {
        /// The rejected threshold.
        value: f64,
    },

    /// Returned when a percentile is outside (0, 1).
    #[error("invalid percentile: {value} (must be in (0, 1))")]
    InvalidPercentile {
        /// The rejected percentile.
        value: f64,
    },

    /// Returned when a reference year range misses the time axis entirely.
    #[error("reference period {start}-{end} has no overlap with the record")]
    NoReferenceOverlap {
        /// First reference year.
        start: i32,
        /// Last reference year.
        end: i32,
    },

    /// Propagated grid construction failure.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_threshold() {
        let e = ExtremesError::InvalidThreshold { value: -1.0 };
        assert_eq!(
            e.to_string(),
            "invalid threshold: -1 mm (must be finite and non-negative)"
        );
    }

    #[test]
    fn error_invalid_percentile() {
        let e = ExtremesError::InvalidPercentile { value: 95.0 };
        assert_eq!(e.to_string(), "invalid percentile: 95 (must be in (0, 1))");
    }

    #[test]
    fn error_no_reference_overlap() {
        let e = ExtremesError::NoReferenceOverlap {
            start: 1900,
            end: 1910,
        };
        assert_eq!(
            e.to_string(),
            "reference period 1900-1910 has no overlap with the record"
        );
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ExtremesError>();
    }
}
