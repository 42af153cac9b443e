//! Domain entities - core business objects

mod post;
mod report;
mod user_action;
mod user_profile;

pub use post::{NewPost, Post, PostKind, PostStatus, DELETED_POST_CONTENT, REPLY_PREVIEW_LIMIT};
pub use report::{NewReport, Report};
pub use user_action::{ActionKind, ActionState, UserAction};
pub use user_profile::UserProfile;
