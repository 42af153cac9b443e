//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in feed-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod ordering;
mod post;
mod report;
mod user_action;
mod user_profile;

pub use post::PgPostRepository;
pub use report::PgReportRepository;
pub use user_action::PgUserActionRepository;
pub use user_profile::PgUserProfileRepository;
