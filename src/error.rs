//! Typed errors for store, handler and subscription operations.

use thiserror::Error;

/// Failure of a single request. The store is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Referenced id does not exist
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (user email, entity id)
    #[error("{0}")]
    Conflict(String),

    /// Dangling or unpublished foreign key
    #[error("{0}")]
    Validation(String),
}

impl StoreError {
    pub fn user_not_found(id: &str) -> Self {
        StoreError::NotFound(format!("User '{}' not found", id))
    }

    pub fn post_not_found(id: &str) -> Self {
        StoreError::NotFound(format!("Post '{}' not found", id))
    }

    pub fn comment_not_found(id: &str) -> Self {
        StoreError::NotFound(format!("Comment '{}' not found", id))
    }

    pub fn email_taken(email: &str) -> Self {
        StoreError::Conflict(format!("Email '{}' is already taken", email))
    }

    pub fn id_taken(kind: &str, id: &str) -> Self {
        StoreError::Conflict(format!("{} id '{}' is already in use", kind, id))
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "NOT_FOUND",
            StoreError::Conflict(_) => "CONFLICT",
            StoreError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
