//! Entity to model mappers
//!
//! This module provides conversions between domain entities (feed-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod post;
mod report;
mod user_action;
mod user_details;

pub use post::{post_kind_to_str, PostInsert};
pub use user_action::action_kind_to_str;
