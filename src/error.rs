//! Error types for building and loading parameter spaces

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a parameter space.
///
/// Every variant is raised at the call that violates the contract.
/// Enumerating an already built space never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Sanitized parameter name is already registered
    #[error("Duplicate parameter name '{name}' (sanitized to '{sanitized}')")]
    DuplicateName { name: String, sanitized: String },

    /// Parameter definition rejected at add time
    #[error("Invalid parameter '{name}': {message}")]
    Validation { name: String, message: String },

    /// Declarative spec does not follow the expected schema
    #[error("Invalid spec{}: {message}", .entry.as_ref().map(|e| format!(" entry '{e}'")).unwrap_or_default())]
    Schema {
        entry: Option<String>,
        message: String,
    },

    /// Spec file could not be read
    #[error("Failed to read spec file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Spec document is not valid YAML
    #[error("Failed to parse spec: {message}")]
    Parse { message: String },
}

impl Error {
    /// Schema error attached to a named entry.
    pub fn schema(entry: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            entry: Some(entry.into()),
            message: message.into(),
        }
    }

    /// Schema error about the document as a whole.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Schema {
            entry: None,
            message: message.into(),
        }
    }

    /// Check if the error was caused by the caller's input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Result type for parameter space operations
pub type Result<T> = std::result::Result<T, Error>;
