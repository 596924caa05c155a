//! Paint configuration
//!
//! `PaintConfig` controls how a [`PaintContext`](crate::PaintContext) turns
//! surface calls into paths. It can be built in code or loaded from TOML:
//!
//! ```toml
//! line_width = 2.0
//! max_arc_segment = 0.785398
//! record_empty_paints = true
//! ```

use std::f64::consts::PI;

use quill_core::HALF_PI;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapeError};

/// Settings for a [`PaintContext`](crate::PaintContext)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaintConfig {
    /// Stroke width recorded with every stroke, in user units
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    /// Largest sweep (radians) a single cubic segment may approximate
    #[serde(default = "default_max_arc_segment")]
    pub max_arc_segment: f64,
    /// Record paint commands even when the current path is empty
    #[serde(default)]
    pub record_empty_paints: bool,
}

fn default_line_width() -> f64 {
    1.0
}

fn default_max_arc_segment() -> f64 {
    HALF_PI
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            max_arc_segment: default_max_arc_segment(),
            record_empty_paints: false,
        }
    }
}

impl PaintConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PaintConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_max_arc_segment(mut self, angle: f64) -> Self {
        self.max_arc_segment = angle;
        self
    }

    pub fn with_record_empty_paints(mut self, record: bool) -> Self {
        self.record_empty_paints = record;
        self
    }

    /// Reject values a paint context cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(ShapeError::InvalidConfig(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        if !(self.max_arc_segment > 0.0 && self.max_arc_segment <= PI) {
            return Err(ShapeError::InvalidConfig(format!(
                "max_arc_segment must be in (0, pi], got {}",
                self.max_arc_segment
            )));
        }
        Ok(())
    }
}
