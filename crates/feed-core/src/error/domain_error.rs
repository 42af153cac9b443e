//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{IdParseError, PostId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(#[from] IdParseError),

    #[error("Invalid parent post: {0}")]
    InvalidParent(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not post author")]
    NotPostAuthor,

    #[error("Replies cannot be bookmarked")]
    ReplyNotBookmarkable,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Post has been deleted")]
    PostDeleted,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidId(_) => "INVALID_ID",
            Self::InvalidParent(_) => "INVALID_PARENT",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotPostAuthor => "NOT_POST_AUTHOR",
            Self::ReplyNotBookmarkable => "REPLY_NOT_BOOKMARKABLE",

            // Business Rules
            Self::PostDeleted => "POST_DELETED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PostNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidId(_)
                | Self::InvalidParent(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPostAuthor | Self::ReplyNotBookmarkable)
    }

    /// Check if the request broke a business rule on an existing resource
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::PostDeleted)
    }

    /// Check if a backing service could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::CacheError(_))
    }
}
