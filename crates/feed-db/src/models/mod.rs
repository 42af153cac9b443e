//! Database models - SQLx-compatible structs for PostgreSQL tables

mod post;
mod report;
mod user_action;
mod user_details;

pub use post::{PostModel, ReplyCountModel};
pub use report::ReportModel;
pub use user_action::UserActionModel;
pub use user_details::UserDetailsModel;
