//! Error types for the kanri service.
//!
//! Every failure resolves to one of two user-visible classes: a client
//! input problem (the model reply could not be turned into a valid task)
//! or a server/dependency problem (model call, storage, configuration).

use thiserror::Error;

/// Result type alias using [`KanriError`].
pub type KanriResult<T> = Result<T, KanriError>;

/// Error type for all kanri operations.
#[derive(Debug, Error)]
pub enum KanriError {
    /// Model output did not contain a well-formed, complete task object,
    /// or a field failed validation. Client class.
    #[error("failed to parse task from model output")]
    Extraction,

    /// The external model call itself failed (timeout, transport error,
    /// API error, unexpected response shape). Server class.
    #[error("model invocation failed: {0}")]
    Model(String),

    /// No record matches the addressed key.
    #[error("no {entity} record matching {key}")]
    NotFound {
        entity: &'static str,
        key: String,
    },

    /// Failed to read a storage file.
    #[error("failed to read {path}: {reason}")]
    FileRead { path: String, reason: String },

    /// Failed to write a storage file.
    #[error("failed to write {path}: {reason}")]
    FileWrite { path: String, reason: String },

    /// Invalid service configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl KanriError {
    /// Whether the failure is a client input problem rather than a
    /// server/dependency problem.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_is_client_class() {
        assert!(KanriError::Extraction.is_client_error());
        assert!(!KanriError::Model("timeout".to_string()).is_client_error());
        assert!(!KanriError::FileWrite {
            path: "tasks.json".to_string(),
            reason: "disk full".to_string(),
        }
        .is_client_error());
    }
}
