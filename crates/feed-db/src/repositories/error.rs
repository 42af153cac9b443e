//! Error handling utilities for repositories

use feed_core::error::DomainError;
use feed_core::value_objects::PostId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Foreign key violations on post_id mean the post is gone
pub fn map_post_fk_violation(e: SqlxError, post_id: PostId) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return post_not_found(post_id);
        }
    }
    map_db_error(e)
}

/// Create a "post not found" error
pub fn post_not_found(id: PostId) -> DomainError {
    DomainError::PostNotFound(id)
}
