use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

/// Top-level indra configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndraConfig {
    /// Archive loader settings.
    #[serde(default)]
    pub io: IoToml,

    /// Trend engine settings.
    #[serde(default)]
    pub trend: TrendToml,

    /// SPI engine settings.
    #[serde(default)]
    pub spi: SpiToml,

    /// Extremes settings.
    #[serde(default)]
    pub extremes: ExtremesToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_precip_aliases")]
    pub precip_aliases: Vec<String>,
    #[serde(default = "default_sentinel")]
    pub sentinel: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrendToml {
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpiToml {
    #[serde(default = "default_scale")]
    pub scale: usize,
    #[serde(default = "default_clamp")]
    pub clamp: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtremesToml {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_percentile")]
    pub percentile: f64,
}

fn default_precip_aliases() -> Vec<String> {
    vec!["tp".to_string(), "precip".to_string(), "pr".to_string()]
}
fn default_sentinel() -> Option<f64> {
    Some(-99.9)
}
fn default_alpha() -> f64 {
    0.05
}
fn default_scale() -> usize {
    3
}
fn default_clamp() -> f64 {
    3.09
}
fn default_threshold() -> f64 {
    10.0
}
fn default_percentile() -> f64 {
    0.95
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            precip_aliases: default_precip_aliases(),
            sentinel: default_sentinel(),
        }
    }
}

impl Default for TrendToml {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
        }
    }
}

impl Default for SpiToml {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            clamp: default_clamp(),
        }
    }
}

impl Default for ExtremesToml {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            percentile: default_percentile(),
        }
    }
}

impl Default for IndraConfig {
    fn default() -> Self {
        Self {
            io: IoToml::default(),
            trend: TrendToml::default(),
            spi: SpiToml::default(),
            extremes: ExtremesToml::default(),
        }
    }
}

impl IndraConfig {
    /// Load the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
