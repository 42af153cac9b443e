//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Longest accepted post body, in characters
pub const MAX_CONTENT_LENGTH: u64 = 5000;

/// Surrounding whitespace does not count towards the body length
fn trimmed_content_length(content: &str) -> Result<(), ValidationError> {
    let len = content.trim().chars().count() as u64;
    if len == 0 || len > MAX_CONTENT_LENGTH {
        let mut err = ValidationError::new("length");
        err.message = Some("Content must be 1-5000 characters".into());
        return Err(err);
    }
    Ok(())
}

/// Create a top-level post or a reply
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(custom(function = "trimmed_content_length"))]
    pub content: String,

    /// Parent post; absent or 0 creates a top-level post
    #[serde(default)]
    #[validate(range(min = 0, message = "parent_id must not be negative"))]
    pub parent_id: Option<i64>,

    /// Optional explicit kind (`COMMENT` or `REPLY`); must agree with `parent_id`
    #[serde(default)]
    pub kind: Option<String>,
}

impl CreatePostRequest {
    /// Parent id with the legacy `0` sentinel folded into `None`
    pub fn parent(&self) -> Option<i64> {
        self.parent_id.filter(|id| *id != 0)
    }

    /// Body as stored, without surrounding whitespace
    pub fn trimmed_content(&self) -> &str {
        self.content.trim()
    }
}

/// Create or replace the caller's author display fields
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpsertProfileRequest {
    #[validate(length(max = 255, message = "first_name must be at most 255 characters"))]
    pub first_name: String,

    #[validate(length(max = 255, message = "middle_name must be at most 255 characters"))]
    pub middle_name: String,

    #[validate(length(max = 255, message = "last_name must be at most 255 characters"))]
    pub last_name: String,

    #[validate(length(max = 32, message = "phone must be at most 32 characters"))]
    pub phone: String,

    #[validate(length(max = 2048, message = "avatar_url must be at most 2048 characters"))]
    pub avatar_url: String,
}

/// File a moderation report against a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReportPostRequest {
    #[validate(range(min = 1, message = "master_report_id must be positive"))]
    pub master_report_id: i64,
}
