//! Post source reader
//!
//! Two independently ordered read paths feed one page: the viewer's own
//! posts and the community source. Every read is a bounded LIMIT/OFFSET
//! window; a short or empty window is a valid result.

use feed_core::traits::{AuthorScope, PostQuery};
use feed_core::{ChannelId, Post, PostOrdering, SortMode, UserId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Which community read path a request maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunitySource {
    /// Bookmarks view in ideas-based mode shows nothing
    Empty,
    /// Posts the viewer has bookmarked, newest bookmark first
    Bookmarked,
    /// Every author, pinned first
    AllAuthors,
    /// Everyone but the viewer, most liked first
    OtherAuthors,
}

impl CommunitySource {
    pub const fn select(sort_mode: SortMode, bookmarks_only: bool) -> Self {
        match (bookmarks_only, sort_mode) {
            (true, SortMode::IdeasBased) => Self::Empty,
            (true, SortMode::UserBased) => Self::Bookmarked,
            (false, SortMode::IdeasBased) => Self::AllAuthors,
            (false, SortMode::UserBased) => Self::OtherAuthors,
        }
    }

    /// Whether the viewer's own posts are served ahead of this source
    pub const fn has_own_tier(self) -> bool {
        matches!(self, Self::OtherAuthors)
    }
}

pub struct PostSourceReader<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostSourceReader<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Number of the viewer's own top-level posts that lead the feed
    #[instrument(skip(self))]
    pub async fn own_count(
        &self,
        channel_id: &ChannelId,
        viewer_id: &UserId,
        sort_mode: SortMode,
        bookmarks_only: bool,
    ) -> ServiceResult<i64> {
        if !CommunitySource::select(sort_mode, bookmarks_only).has_own_tier() {
            return Ok(0);
        }

        let count = self
            .ctx
            .post_repo()
            .count(channel_id, &AuthorScope::Only(viewer_id.clone()))
            .await?;
        Ok(count)
    }

    /// Window over the viewer's own posts: deleted last, then newest
    #[instrument(skip(self))]
    pub async fn own_posts(
        &self,
        channel_id: &ChannelId,
        viewer_id: &UserId,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<Post>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let posts = self
            .ctx
            .post_repo()
            .find_page(&PostQuery {
                channel_id: channel_id.clone(),
                author: AuthorScope::Only(viewer_id.clone()),
                ordering: PostOrdering::Recency,
                limit,
                offset,
            })
            .await?;

        debug!(count = posts.len(), "Fetched own posts");
        Ok(posts)
    }

    /// Window over the community source selected by mode and bookmark filter
    #[instrument(skip(self))]
    pub async fn community_posts(
        &self,
        channel_id: &ChannelId,
        viewer_id: &UserId,
        sort_mode: SortMode,
        bookmarks_only: bool,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<Post>> {
        if limit <= 0 {
            return Ok(Vec::new());
        }

        let repo = self.ctx.post_repo();
        let posts = match CommunitySource::select(sort_mode, bookmarks_only) {
            CommunitySource::Empty => Vec::new(),
            CommunitySource::Bookmarked => {
                repo.find_bookmarked_page(channel_id, viewer_id, limit, offset)
                    .await?
            }
            CommunitySource::AllAuthors => {
                repo.find_page(&PostQuery {
                    channel_id: channel_id.clone(),
                    author: AuthorScope::Any,
                    ordering: PostOrdering::PinnedFirst,
                    limit,
                    offset,
                })
                .await?
            }
            CommunitySource::OtherAuthors => {
                repo.find_page(&PostQuery {
                    channel_id: channel_id.clone(),
                    author: AuthorScope::Excluding(viewer_id.clone()),
                    ordering: PostOrdering::Engagement,
                    limit,
                    offset,
                })
                .await?
            }
        };

        debug!(count = posts.len(), "Fetched community posts");
        Ok(posts)
    }

    /// Total records behind the pagination metadata.
    ///
    /// The regular feed counts every top-level post in the channel, which is
    /// exactly the own tier plus the community source. The bookmarks view
    /// counts the viewer's bookmarks.
    #[instrument(skip(self))]
    pub async fn total_records(
        &self,
        channel_id: &ChannelId,
        viewer_id: &UserId,
        sort_mode: SortMode,
        bookmarks_only: bool,
    ) -> ServiceResult<i64> {
        let repo = self.ctx.post_repo();
        let total = match CommunitySource::select(sort_mode, bookmarks_only) {
            CommunitySource::Empty => 0,
            CommunitySource::Bookmarked => repo.count_bookmarked(channel_id, viewer_id).await?,
            CommunitySource::AllAuthors | CommunitySource::OtherAuthors => {
                repo.count(channel_id, &AuthorScope::Any).await?
            }
        };
        Ok(total)
    }
}
