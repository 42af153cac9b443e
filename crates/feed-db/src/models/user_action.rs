//! User action database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_actions table
#[derive(Debug, Clone, FromRow)]
pub struct UserActionModel {
    pub post_id: i64,
    pub user_id: String,
    pub action: String,
    pub value: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
