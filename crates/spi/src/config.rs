//! Configuration for SPI computation.

use crate::error::SpiError;

/// Method used to fit gamma distribution parameters to the positive
/// accumulations of a calendar-month group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMethod {
    /// Thom's approximate maximum-likelihood estimator, the standard SPI
    /// fit.
    #[default]
    ThomMle,
    /// Method of moments estimation.
    Mme,
}

/// Configuration for SPI estimation.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use indra_spi::SpiConfig;
///
/// let config = SpiConfig::new().with_scale(12).with_min_samples(6);
/// ```
#[derive(Clone, Debug)]
pub struct SpiConfig {
    scale: usize,
    fit_method: FitMethod,
    min_samples: usize,
    clamp: f64,
}

impl SpiConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `scale = 3`, `fit_method = ThomMle`, `min_samples = 4`,
    /// `clamp = 3.09` (the conventional fitted-index validity range).
    pub fn new() -> Self {
        Self {
            scale: 3,
            fit_method: FitMethod::ThomMle,
            min_samples: 4,
            clamp: 3.09,
        }
    }

    // --- Builder methods ---

    /// Sets the accumulation scale in months (typical: 3, 6, 12, 24).
    pub fn with_scale(mut self, scale: usize) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the distribution fitting method.
    pub fn with_fit_method(mut self, m: FitMethod) -> Self {
        self.fit_method = m;
        self
    }

    /// Sets the minimum number of positive accumulations a calendar-month
    /// group needs before a fit is attempted.
    pub fn with_min_samples(mut self, n: usize) -> Self {
        self.min_samples = n;
        self
    }

    /// Sets the symmetric bound the index is clamped to.
    pub fn with_clamp(mut self, clamp: f64) -> Self {
        self.clamp = clamp;
        self
    }

    // --- Accessors ---

    /// Accumulation scale in months.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Distribution fitting method.
    pub fn fit_method(&self) -> FitMethod {
        self.fit_method
    }

    /// Minimum positive samples per calendar-month group.
    pub fn min_samples(&self) -> usize {
        self.min_samples
    }

    /// Symmetric clamp bound for the index.
    pub fn clamp(&self) -> f64 {
        self.clamp
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SpiError::InvalidConfig`] if `scale` is zero,
    /// `min_samples` is below 2, or `clamp` is not a positive finite
    /// number.
    pub fn validate(&self) -> Result<(), SpiError> {
        if self.scale == 0 {
            return Err(SpiError::InvalidConfig {
                reason: "scale must be at least 1".to_string(),
            });
        }
        if self.min_samples < 2 {
            return Err(SpiError::InvalidConfig {
                reason: "min_samples must be at least 2".to_string(),
            });
        }
        if !self.clamp.is_finite() || self.clamp <= 0.0 {
            return Err(SpiError::InvalidConfig {
                reason: format!("clamp must be positive and finite, got {}", self.clamp),
            });
        }
        Ok(())
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new()
    }
}
