//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{NewReport, Report};
use feed_core::traits::{RepoResult, ReportRepository};

use crate::models::ReportModel;

use super::error::map_post_fk_violation;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self))]
    async fn create(&self, report: &NewReport) -> RepoResult<Report> {
        let result = sqlx::query_as::<_, ReportModel>(
            r#"
            INSERT INTO reports (post_id, master_report_id, reported_by)
            VALUES ($1, $2, $3)
            RETURNING id, post_id, master_report_id, reported_by, created_at
            "#,
        )
        .bind(report.post_id.into_inner())
        .bind(report.master_report_id)
        .bind(report.reported_by.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_post_fk_violation(e, report.post_id))?;

        Ok(Report::from(result))
    }
}
