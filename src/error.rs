//! Error types for repository and store operations.

use std::time::Duration;

use mongodb::error::ErrorKind;

/// Errors surfaced by [`crate::repositories::Repository`] and the [`crate::storage::Store`] backends.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation '{operation}' timed out after {after:?}")]
    Timeout { operation: &'static str, after: Duration },

    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Failed to decode document: {0}")]
    Decode(String),

    #[error("Like counter overflow for lyric {0}")]
    LikesOverflow(String),

    #[error("Store error: {0}")]
    Store(#[source] mongodb::error::Error),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        RepositoryError::NotFound { entity, id: id.into() }
    }

    /// True for a missing record, the case an API layer usually renders as `null`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RepositoryError::Timeout { .. })
    }
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(err: mongodb::error::Error) -> Self {
        let mapped = match err.kind.as_ref() {
            ErrorKind::BsonDeserialization(e) => Some(RepositoryError::Decode(e.to_string())),
            ErrorKind::ServerSelection { message, .. } => Some(RepositoryError::Connection(message.clone())),
            _ => None,
        };
        mapped.unwrap_or(RepositoryError::Store(err))
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
