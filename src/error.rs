//! Error types for the autoconcept CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for autoconcept operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum AutoconceptError {
    /// User provided invalid arguments or a filesystem operation failed.
    #[error("{0}")]
    UserError(String),

    /// Missing credential or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The image generation service failed or returned an unusable payload.
    #[error("Image service failed: {0}")]
    ImageServiceError(String),

    /// A persisted document is not in the shape the run requires.
    #[error("Precondition failed: {0}")]
    PreconditionError(String),

    /// A template references a known field that was not supplied.
    #[error("Template rendering failed: {0}")]
    TemplateError(String),
}

impl AutoconceptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AutoconceptError::UserError(_) => exit_codes::USER_ERROR,
            AutoconceptError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            AutoconceptError::ImageServiceError(_) => exit_codes::IMAGE_SERVICE_FAILURE,
            AutoconceptError::PreconditionError(_) => exit_codes::PRECONDITION_FAILURE,
            AutoconceptError::TemplateError(_) => exit_codes::TEMPLATE_FAILURE,
        }
    }
}

/// Result type alias for autoconcept operations.
pub type Result<T> = std::result::Result<T, AutoconceptError>;
