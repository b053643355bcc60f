//! Core error types for the album catalog

use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for the album catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A client-supplied field failed validation
    #[error("{message}")]
    InvalidInput {
        /// Name of the offending field (`body` when the payload itself is unusable)
        field: String,
        /// Human readable explanation, suitable for the response body
        message: String,
    },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record that was looked up
        entity: String,
        /// Key the lookup used
        id: String,
    },

    /// A uniqueness constraint was violated
    #[error("Album already registered ({field} must be unique)")]
    Conflict {
        /// Column whose uniqueness was violated
        field: String,
    },

    /// Stored data breaks an invariant the schema is supposed to guarantee
    #[error("Data integrity fault: {0}")]
    Integrity(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl CatalogError {
    /// Create an invalid input error for `field`
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a conflict error for a unique `field`
    pub fn conflict(field: impl Into<String>) -> Self {
        Self::Conflict {
            field: field.into(),
        }
    }

    /// Create an integrity error
    pub fn integrity(msg: impl Into<String>) -> Self {
        Self::Integrity(msg.into())
    }

    /// Whether the caller can fix this error by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::NotFound { .. } | Self::Conflict { .. }
        )
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
