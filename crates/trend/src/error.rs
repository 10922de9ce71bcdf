//! Error types for the indra-trend crate.

/// Error type for all fallible operations in the indra-trend crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TrendError {
    /// Returned when a significance level is outside (0, 1].
    #[error("invalid significance level: {alpha} (must be in (0, 1])")]
    InvalidAlpha {
        /// The rejected level.
        alpha: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_alpha() {
        let e = TrendError::InvalidAlpha { alpha: 1.5 };
        assert_eq!(
            e.to_string(),
            "invalid significance level: 1.5 (must be in (0, 1])"
        );
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<TrendError>();
    }
}
