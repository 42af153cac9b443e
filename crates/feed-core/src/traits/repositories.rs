//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ActionKind, NewPost, NewReport, Post, Report, UserAction, UserProfile};
use crate::error::DomainError;
use crate::value_objects::{ChannelId, PostId, PostOrdering, ReplyRanking, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

/// Author filter for a top-level post source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorScope {
    Any,
    Only(UserId),
    Excluding(UserId),
}

impl AuthorScope {
    pub fn matches(&self, author_id: &UserId) -> bool {
        match self {
            Self::Any => true,
            Self::Only(user_id) => author_id == user_id,
            Self::Excluding(user_id) => author_id != user_id,
        }
    }
}

/// Bounded window over the top-level posts of a channel
#[derive(Debug, Clone)]
pub struct PostQuery {
    pub channel_id: ChannelId,
    pub author: AuthorScope,
    pub ordering: PostOrdering,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID (any kind, any status)
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// Page of top-level posts matching the query
    async fn find_page(&self, query: &PostQuery) -> RepoResult<Vec<Post>>;

    /// Count top-level posts in a channel, deleted ones included
    async fn count(&self, channel_id: &ChannelId, author: &AuthorScope) -> RepoResult<i64>;

    /// Page of top-level posts the user currently has bookmarked,
    /// most recently bookmarked first
    async fn find_bookmarked_page(
        &self,
        channel_id: &ChannelId,
        user_id: &UserId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Post>>;

    /// Count top-level posts the user currently has bookmarked
    async fn count_bookmarked(&self, channel_id: &ChannelId, user_id: &UserId) -> RepoResult<i64>;

    /// Up to `per_parent` best-ranked replies under each parent.
    /// Rows come back grouped by nothing in particular; callers re-rank.
    async fn find_reply_candidates(
        &self,
        parent_ids: &[PostId],
        ranking: ReplyRanking,
        per_parent: usize,
    ) -> RepoResult<Vec<Post>>;

    /// Page of replies under one parent in ranking order
    async fn find_replies_page(
        &self,
        parent_id: PostId,
        ranking: ReplyRanking,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Post>>;

    /// Reply count per parent; parents without replies may be absent
    async fn count_replies(&self, parent_ids: &[PostId]) -> RepoResult<HashMap<PostId, i64>>;

    /// Insert a post and return the stored row
    async fn create(&self, post: &NewPost) -> RepoResult<Post>;

    /// Rewrite content to the deleted marker and flip status
    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> RepoResult<()>;

    /// Round-trip check for readiness
    async fn ping(&self) -> RepoResult<()>;
}

// ============================================================================
// User Action Repository
// ============================================================================

/// Result of flipping an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub value: bool,
    pub count: i64,
}

#[async_trait]
pub trait UserActionRepository: Send + Sync {
    /// All action rows the user has on the given posts
    async fn find_values(&self, post_ids: &[PostId], user_id: &UserId)
        -> RepoResult<Vec<UserAction>>;

    /// Flip the user's action on a post and adjust the post's counter.
    /// A missing row counts as `false`, so the first toggle sets `true`.
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: &UserId,
        kind: ActionKind,
    ) -> RepoResult<ToggleOutcome>;
}

// ============================================================================
// User Profile Repository
// ============================================================================

#[async_trait]
pub trait UserProfileRepository: Send + Sync {
    /// Profiles for the given users; unknown ids are skipped
    async fn find_by_ids(&self, user_ids: &[UserId]) -> RepoResult<Vec<UserProfile>>;

    /// Insert the profile, or overwrite every display field of an existing one
    async fn upsert(&self, profile: &UserProfile) -> RepoResult<UserProfile>;
}

// ============================================================================
// Report Repository
// ============================================================================

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Record a moderation report
    async fn create(&self, report: &NewReport) -> RepoResult<Report>;
}
