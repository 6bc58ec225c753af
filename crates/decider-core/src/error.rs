//! Error types for the Decider library.

use thiserror::Error;

/// A shared error type for the storage and codec seam.
///
/// Failures at this seam are handled inside [`crate::store::DecisionStore`];
/// nothing here crosses the collaborator-facing mutation API.
#[derive(Error, Debug, Clone)]
pub enum DeciderError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage backend error (key-value layer)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DeciderError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}

impl From<std::io::Error> for DeciderError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for DeciderError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A type alias for `Result<T, DeciderError>`.
pub type Result<T> = std::result::Result<T, DeciderError>;
