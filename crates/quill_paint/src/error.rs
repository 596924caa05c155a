//! Error types for quill_paint

use quill_core::SurfaceError;
use thiserror::Error;

/// Errors that can occur while building or painting a shape
#[derive(Error, Debug)]
pub enum ShapeError {
    /// The surface failed; passed through unchanged
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Inputs the shape has no sensible drawing for
    #[error("{operation}: {reason}")]
    PreconditionViolated {
        operation: &'static str,
        reason: String,
    },

    /// Paint configuration could not be parsed
    #[error("invalid paint configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Paint configuration could not be serialized
    #[error("failed to serialize paint configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Paint configuration parsed but holds unusable values
    #[error("invalid paint configuration: {0}")]
    InvalidConfig(String),
}

impl ShapeError {
    pub(crate) fn precondition(operation: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(operation, %reason, "shape precondition violated");
        ShapeError::PreconditionViolated { operation, reason }
    }
}

/// Result type for quill_paint operations
pub type Result<T> = std::result::Result<T, ShapeError>;
