//! Post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table.
///
/// The `type` column is selected as `post_type`; top-level posts store `parent_id = 0`.
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub channel_id: String,
    pub user_id: String,
    pub content: String,
    pub post_type: String,
    pub parent_id: i64,
    pub like_count: i64,
    pub bookmark_count: i64,
    pub is_pinned: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl PostModel {
    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.parent_id == 0
    }
}

/// Aggregated reply count per parent
#[derive(Debug, Clone, FromRow)]
pub struct ReplyCountModel {
    pub parent_id: i64,
    pub reply_count: i64,
}
