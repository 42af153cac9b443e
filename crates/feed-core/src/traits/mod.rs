//! Ports implemented by the infrastructure crates

mod cache;
mod repositories;

pub use cache::FlagCache;
pub use repositories::{
    AuthorScope, PostQuery, PostRepository, RepoResult, ReportRepository, ToggleOutcome,
    UserActionRepository, UserProfileRepository,
};
