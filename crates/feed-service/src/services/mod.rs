//! Business logic services
//!
//! The feed read path is split into small components that each own one step
//! of composing a page; `FeedService` wires them together. `PostService`
//! covers the write side and `ProfileService` the author display fields.

pub mod action_state;
pub mod context;
pub mod error;
pub mod feed;
pub mod planner;
pub mod post;
pub mod post_source;
pub mod profile;
pub mod reply_preview;
pub mod unread;

pub use action_state::ActionStateLookup;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feed::{FeedPageQuery, FeedService, RepliesQuery};
pub use planner::{PagePlan, PageWindowPlanner};
pub use post::PostService;
pub use post_source::{CommunitySource, PostSourceReader};
pub use profile::ProfileService;
pub use reply_preview::ReplyPreviewSelector;
pub use unread::UnreadFlagTracker;
