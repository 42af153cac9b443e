//! # feed-core
//!
//! Domain layer for the community feed: posts, user actions, author profiles,
//! ranking rules, pagination math and the repository/cache ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ActionKind, ActionState, NewPost, NewReport, Post, PostKind, PostStatus, Report, UserAction,
    UserProfile, DELETED_POST_CONTENT, REPLY_PREVIEW_LIMIT,
};
pub use error::DomainError;
pub use traits::{
    AuthorScope, FlagCache, PostQuery, PostRepository, RepoResult, ReportRepository,
    ToggleOutcome, UserActionRepository, UserProfileRepository,
};
pub use value_objects::{
    ChannelId, IdParseError, PaginationWindow, PostId, PostOrdering, ReplyRanking, SortMode,
    UserId,
};
