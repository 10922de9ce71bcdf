//! Error types for the indra-spi crate.

use indra_grid::GridError;

/// Error type for all fallible operations in the indra-spi crate.
///
/// Only structural problems surface here; per-pixel fit failures are
/// contained inside the computation and produce missing output cells.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SpiError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the input grid is not a contiguous monthly series.
    #[error("input grid is not monthly: {reason}")]
    NotMonthly {
        /// Description of the problem.
        reason: String,
    },

    /// Propagated grid construction failure.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_config() {
        let e = SpiError::InvalidConfig {
            reason: "scale must be at least 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: scale must be at least 1"
        );
    }

    #[test]
    fn error_not_monthly() {
        let e = SpiError::NotMonthly {
            reason: "gap between 2000-01-31 and 2000-03-31".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "input grid is not monthly: gap between 2000-01-31 and 2000-03-31"
        );
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<SpiError>();
    }
}
