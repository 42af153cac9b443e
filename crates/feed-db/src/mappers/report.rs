//! Report entity <-> model mapper

use feed_core::entities::Report;
use feed_core::value_objects::{PostId, UserId};

use crate::models::ReportModel;

impl From<ReportModel> for Report {
    fn from(model: ReportModel) -> Self {
        Report {
            id: model.id,
            post_id: PostId::new(model.post_id),
            reported_by: UserId::new(model.reported_by),
            master_report_id: model.master_report_id,
            created_at: model.created_at,
        }
    }
}
