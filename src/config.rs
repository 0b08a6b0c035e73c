//! Rasterizer configuration.
//!
//! Supports YAML configuration with precedence: builder calls > file > defaults.
//!
//! ```yaml
//! line_algorithm: slope_classified
//! curve_step_degrees: 0.05
//! ```

use crate::error::{Error, Result};
use crate::render::LineAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default angular increment for circle/ellipse sampling, in degrees.
pub const DEFAULT_CURVE_STEP_DEGREES: f32 = 0.1;

/// Tunables consulted by [`Rasterizer`](crate::render::Rasterizer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Algorithm used by `draw_line`, polylines and polygons.
    #[serde(default)]
    pub line_algorithm: LineAlgorithm,

    /// Angular increment over the 0..=45 degree octant when sampling curves.
    ///
    /// Smaller steps close gaps on large radii at the cost of redundant
    /// writes. Outlines are only gap-free while consecutive samples stay
    /// within one pixel of each other.
    #[serde(default = "default_curve_step_degrees")]
    pub curve_step_degrees: f32,
}

fn default_curve_step_degrees() -> f32 {
    DEFAULT_CURVE_STEP_DEGREES
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            line_algorithm: LineAlgorithm::default(),
            curve_step_degrees: default_curve_step_degrees(),
        }
    }
}

impl RasterConfig {
    /// Set the line algorithm.
    #[must_use]
    pub fn with_line_algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.line_algorithm = algorithm;
        self
    }

    /// Set the curve angular step in degrees.
    #[must_use]
    pub fn with_curve_step_degrees(mut self, step: f32) -> Self {
        self.curve_step_degrees = step;
        self
    }

    /// Parse and validate a YAML document. Missing keys take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading raster config from {}", path.as_ref().display());
        Self::from_yaml(&content)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check that the curve step is usable.
    pub fn validate(&self) -> Result<()> {
        let step = self.curve_step_degrees;
        if !step.is_finite() || step <= 0.0 || step > 45.0 {
            return Err(Error::InvalidConfig(format!(
                "curve_step_degrees must be in (0, 45], got {step}"
            )));
        }
        Ok(())
    }
}
