//! Gamma distribution parameter type and statrs bridge.

use crate::error::SpiError;
use statrs::distribution::Gamma;

/// Validated parameters for a Gamma distribution (shape/scale convention).
///
/// Both `shape` (k) and `scale` (theta) must be finite and positive.
/// Use [`GammaParams::from_thom`] for the standard SPI fit or
/// [`GammaParams::from_moments`] for method-of-moments estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaParams {
    shape: f64,
    scale: f64,
}

impl GammaParams {
    /// Create new gamma parameters after validating that both `shape` and
    /// `scale` are finite and strictly positive.
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if shape.is_finite() && shape > 0.0 && scale.is_finite() && scale > 0.0 {
            Some(Self { shape, scale })
        } else {
            None
        }
    }

    /// Estimate gamma parameters with Thom's approximate maximum-likelihood
    /// estimator from the sample mean and the mean of log values:
    ///
    /// - A = ln(mean) - mean(ln x)
    /// - shape = (1 + sqrt(1 + 4A/3)) / (4A)
    /// - scale = mean / shape
    ///
    /// Returns `None` if `mean` is not finite and positive or A is not
    /// strictly positive (near-constant samples push A to zero and the
    /// shape estimate to infinity).
    pub fn from_thom(mean: f64, mean_ln: f64) -> Option<Self> {
        if !mean.is_finite() || mean <= 0.0 || !mean_ln.is_finite() {
            return None;
        }
        let a = mean.ln() - mean_ln;
        if !(a > 0.0) {
            return None;
        }
        let shape = (1.0 + (1.0 + 4.0 * a / 3.0).sqrt()) / (4.0 * a);
        let scale = mean / shape;
        Self::new(shape, scale)
    }

    /// Estimate gamma parameters from sample mean and variance using the
    /// method of moments.
    ///
    /// - shape = mean² / var
    /// - scale = var / mean
    ///
    /// Returns `None` if `mean` or `var` are not finite and positive.
    pub fn from_moments(mean: f64, var: f64) -> Option<Self> {
        if !mean.is_finite() || mean <= 0.0 || !var.is_finite() || var <= 0.0 {
            return None;
        }
        let shape = (mean * mean) / var;
        let scale = var / mean;
        Self::new(shape, scale)
    }

    /// Shape parameter (k).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter (theta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Distribution mean (shape * scale).
    pub fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    /// Rate parameter (1 / scale), used by statrs which parameterises Gamma
    /// by (shape, rate) rather than (shape, scale).
    pub(crate) fn rate(&self) -> f64 {
        1.0 / self.scale
    }
}

/// Build a [`statrs::distribution::Gamma`] from validated [`GammaParams`].
pub(crate) fn gamma_dist(params: &GammaParams) -> Result<Gamma, SpiError> {
    Gamma::new(params.shape(), params.rate()).map_err(|e| SpiError::InvalidConfig {
        reason: format!(
            "gamma construction failed (shape={}, scale={}): {e}",
            params.shape(),
            params.scale()
        ),
    })
}
