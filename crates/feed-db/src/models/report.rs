//! Report database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ReportModel {
    pub id: i64,
    pub post_id: i64,
    pub master_report_id: i64,
    pub reported_by: String,
    pub created_at: DateTime<Utc>,
}
