//! Shared error types for pipeline execution.

use thiserror::Error;

/// Main error type for seqpipe operations
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A stage aborted mid-pipeline; no partial output is kept
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },

    /// Input handed to a type-erased stage did not have the expected type
    #[error("Type mismatch in stage '{stage}': {message}")]
    TypeMismatch { stage: String, message: String },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),

    /// Wrapped external errors
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl PipelineError {
    /// Create a stage failure carrying the stage name
    pub fn stage_failed(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StageFailed {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error for a type-erased stage boundary
    pub fn type_mismatch(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<std::convert::Infallible> for PipelineError {
    fn from(value: std::convert::Infallible) -> Self {
        match value {}
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, PipelineError>;
