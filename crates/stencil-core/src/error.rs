//! Error types for the stencil library.

use std::path::PathBuf;

use thiserror::Error;

use crate::template::TemplateId;

/// Error type for all prompt generation operations.
#[derive(Error, Debug)]
pub enum StencilError {
    /// A required parameter was missing, empty, or of the wrong type
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter { field: String, reason: String },
    /// The template file for the selected identifier does not exist
    #[error("Template '{id}' not found at '{}'", path.display())]
    TemplateNotFound { id: TemplateId, path: PathBuf },
    /// The template file exists but could not be read
    #[error("Template '{id}' at '{}' could not be read: {source}", path.display())]
    TemplateUnreadable {
        id: TemplateId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// No prompt is registered under the requested name
    #[error("Prompt '{name}' not found")]
    PromptNotFound { name: String },
    /// A prompt with the same name is already registered
    #[error("Prompt '{name}' is already registered")]
    DuplicatePrompt { name: String },
}

/// Builder for creating parameter validation errors.
pub struct InvalidParameterBuilder {
    field: String,
}

impl InvalidParameterBuilder {
    /// Create a new invalid parameter error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StencilError {
        StencilError::InvalidParameter {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StencilError {
    /// Creates a builder for parameter validation errors.
    pub fn invalid_parameter(field: impl Into<String>) -> InvalidParameterBuilder {
        InvalidParameterBuilder::new(field)
    }

    /// Whether the caller can fix this error by changing its input.
    ///
    /// Template errors point at a packaging or environment fault instead.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::PromptNotFound { .. }
        )
    }
}

/// Result type alias for stencil operations
pub type Result<T> = std::result::Result<T, StencilError>;
