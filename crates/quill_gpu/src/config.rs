//! Renderer configuration
//!
//! Loaded from TOML, e.g. a `quill.toml`:
//!
//! ```toml
//! fill_tolerance = 0.05
//!
//! [smoothing]
//! scale = 2.0
//! tolerance = 0.1
//! ```
//!
//! Every field is optional.

use std::fs;
use std::path::Path;

use quill_paint::SmoothingApproximation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tessellation settings shared by all contents
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Curve flattening accuracy
    pub smoothing: SmoothingApproximation,
    /// lyon fill tolerance, in path units
    pub fill_tolerance: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            smoothing: SmoothingApproximation::default(),
            fill_tolerance: quill_paint::tessellator::DEFAULT_FILL_TOLERANCE,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded render config from {}", path.as_ref().display());
        Ok(config)
    }
}
