//! Report entity - a moderation report filed against a post

use chrono::{DateTime, Utc};

use crate::value_objects::{PostId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub post_id: PostId,
    pub reported_by: UserId,
    pub master_report_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: i64,
    pub post_id: PostId,
    pub reported_by: UserId,
    pub master_report_id: i64,
    pub created_at: DateTime<Utc>,
}
