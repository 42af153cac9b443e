//! Feed assembly
//!
//! Composes one feed page: plan the window, read both sources, then enrich
//! the merged list with reply previews, reply counts, viewer action state and
//! author display fields. Enrichment lookups degrade to defaults instead of
//! failing the page.

use std::collections::{HashMap, HashSet};

use feed_core::{
    ActionState, ChannelId, PaginationWindow, Post, PostId, SortMode, UserId, UserProfile,
};
use tracing::{debug, instrument, warn};

use crate::dto::{
    AuthorFields, FeedPageResponse, FeedPostResponse, PaginatedResponse, PostWithDetails,
    RepliesPageResponse, ReplyResponse, ReplyWithDetails, UnreadStatusResponse,
};

use super::action_state::ActionStateLookup;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::planner::PageWindowPlanner;
use super::post_source::PostSourceReader;
use super::reply_preview::ReplyPreviewSelector;
use super::unread::UnreadFlagTracker;

/// Parameters of one feed page request
#[derive(Debug, Clone)]
pub struct FeedPageQuery {
    pub channel_id: ChannelId,
    pub viewer_id: UserId,
    pub page: i64,
    pub page_size: i64,
    pub sort_mode: SortMode,
    pub bookmarks_only: bool,
}

/// Parameters of one "all replies" page request
#[derive(Debug, Clone)]
pub struct RepliesQuery {
    pub post_id: PostId,
    pub channel_id: ChannelId,
    pub viewer_id: UserId,
    pub page: i64,
    pub page_size: i64,
    pub sort_mode: SortMode,
}

/// Feed read service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compose one page of a channel feed for the viewer.
    ///
    /// Loading the feed consumes the viewer's unread flag for the channel.
    #[instrument(skip(self))]
    pub async fn compose_feed_page(&self, query: &FeedPageQuery) -> ServiceResult<FeedPageResponse> {
        self.validate_window(query.page, query.page_size)?;

        let plan = PageWindowPlanner::new(self.ctx)
            .plan(
                &query.channel_id,
                &query.viewer_id,
                query.page,
                query.page_size,
                query.sort_mode,
                query.bookmarks_only,
            )
            .await?;

        let reader = PostSourceReader::new(self.ctx);
        let (own, community, total_records) = tokio::try_join!(
            reader.own_posts(
                &query.channel_id,
                &query.viewer_id,
                plan.own_slots,
                plan.own_offset,
            ),
            reader.community_posts(
                &query.channel_id,
                &query.viewer_id,
                query.sort_mode,
                query.bookmarks_only,
                plan.community_slots,
                plan.community_offset,
            ),
            reader.total_records(
                &query.channel_id,
                &query.viewer_id,
                query.sort_mode,
                query.bookmarks_only,
            ),
        )?;

        let mut posts = own;
        posts.extend(community);

        let items = self
            .render_posts(posts, &query.viewer_id, query.sort_mode, query.bookmarks_only)
            .await?;

        let had_unread = UnreadFlagTracker::new(self.ctx)
            .consume(&query.viewer_id, &query.channel_id)
            .await;

        debug!(
            items = items.len(),
            total_records,
            had_unread,
            "Composed feed page"
        );

        let window = PaginationWindow::compute(query.page, query.page_size, total_records);
        Ok(PaginatedResponse::new(items, window))
    }

    /// One post with a page of all its replies, ranked the same way as the
    /// feed preview.
    #[instrument(skip(self))]
    pub async fn list_replies(&self, query: &RepliesQuery) -> ServiceResult<RepliesPageResponse> {
        self.validate_window(query.page, query.page_size)?;

        let parent = self
            .ctx
            .post_repo()
            .find_by_id(query.post_id)
            .await?
            .filter(|post| post.channel_id == query.channel_id)
            .ok_or_else(|| ServiceError::not_found("Post", query.post_id.to_string()))?;

        let offset = (query.page - 1).saturating_mul(query.page_size);
        let parent_ids = [parent.id];
        let selector = ReplyPreviewSelector::new(self.ctx);
        let (replies, counts) = tokio::join!(
            selector.full_list(parent.id, query.sort_mode, query.page_size, offset),
            self.ctx.post_repo().count_replies(&parent_ids),
        );
        let replies = replies?;

        let total_records = match counts {
            Ok(counts) => counts.get(&parent.id).copied().unwrap_or(0),
            Err(e) => {
                warn!(post_id = %parent.id, error = %e, "Reply count failed; using fetched rows");
                offset + replies.len() as i64
            }
        };

        let mut post_ids = vec![parent.id];
        post_ids.extend(replies.iter().map(|r| r.id));
        let author_ids: Vec<UserId> = std::iter::once(&parent)
            .chain(replies.iter())
            .map(|p| p.author_id.clone())
            .collect();

        let lookup = ActionStateLookup::new(self.ctx);
        let (states, profiles) = tokio::join!(
            lookup.lookup(&post_ids, &query.viewer_id),
            self.load_authors(&author_ids),
        );
        let profiles = profiles?;

        let replies = replies
            .into_iter()
            .map(|reply| render_reply(reply, &states, &profiles))
            .collect();
        let state = states.get(&parent.id).copied().unwrap_or_default();
        let author = AuthorFields::from(profiles.get(&parent.author_id));

        let item = FeedPostResponse::from(PostWithDetails {
            post: parent,
            author,
            liked: state.liked,
            bookmarked: state.bookmarked,
            replies_count: total_records,
            replies,
        });

        debug!(post_id = %query.post_id, total_records, "Listed replies");

        let window = PaginationWindow::compute(query.page, query.page_size, total_records);
        Ok(PaginatedResponse::new(item, window))
    }

    /// Whether the viewer has unseen replies in the channel; does not clear it
    #[instrument(skip(self))]
    pub async fn read_status(
        &self,
        channel_id: &ChannelId,
        viewer_id: &UserId,
    ) -> UnreadStatusResponse {
        let is_unread = UnreadFlagTracker::new(self.ctx)
            .peek(viewer_id, channel_id)
            .await;
        UnreadStatusResponse { is_unread }
    }

    fn validate_window(&self, page: i64, page_size: i64) -> ServiceResult<()> {
        if page < 1 {
            return Err(ServiceError::validation("page must be at least 1"));
        }
        let max = self.ctx.feed_config().max_page_size;
        if page_size < 1 || page_size > max {
            return Err(ServiceError::validation(format!(
                "limit must be between 1 and {max}"
            )));
        }
        Ok(())
    }

    /// Enrich an ordered list of top-level posts, preserving its order
    async fn render_posts(
        &self,
        posts: Vec<Post>,
        viewer_id: &UserId,
        sort_mode: SortMode,
        bookmarks_only: bool,
    ) -> ServiceResult<Vec<FeedPostResponse>> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<PostId> = posts.iter().map(|p| p.id).collect();
        let selector = ReplyPreviewSelector::new(self.ctx);
        let (previews, reply_counts) = tokio::join!(
            selector.previews(&post_ids, sort_mode, bookmarks_only),
            self.ctx.post_repo().count_replies(&post_ids),
        );

        let mut previews = previews.unwrap_or_else(|e| {
            warn!(error = %e, "Reply preview lookup failed; rendering without previews");
            HashMap::new()
        });
        let reply_counts = reply_counts
            .map_err(|e| warn!(error = %e, "Reply count lookup failed; using preview sizes"))
            .ok();

        let mut all_ids = post_ids.clone();
        let mut author_ids: Vec<UserId> = posts.iter().map(|p| p.author_id.clone()).collect();
        for reply in previews.values().flatten() {
            all_ids.push(reply.id);
            author_ids.push(reply.author_id.clone());
        }

        let lookup = ActionStateLookup::new(self.ctx);
        let (states, profiles) = tokio::join!(
            lookup.lookup(&all_ids, viewer_id),
            self.load_authors(&author_ids),
        );
        let profiles = profiles?;

        let items = posts
            .into_iter()
            .map(|post| {
                let replies = previews.remove(&post.id).unwrap_or_default();
                let replies_count = match &reply_counts {
                    Some(counts) => counts.get(&post.id).copied().unwrap_or(0),
                    None => replies.len() as i64,
                };
                let state = states.get(&post.id).copied().unwrap_or_default();
                let author = AuthorFields::from(profiles.get(&post.author_id));
                let replies = replies
                    .into_iter()
                    .map(|reply| render_reply(reply, &states, &profiles))
                    .collect();

                FeedPostResponse::from(PostWithDetails {
                    post,
                    author,
                    liked: state.liked,
                    bookmarked: state.bookmarked,
                    replies_count,
                    replies,
                })
            })
            .collect();

        Ok(items)
    }

    /// Profiles keyed by user id; unknown authors are simply absent
    async fn load_authors(&self, user_ids: &[UserId]) -> ServiceResult<HashMap<UserId, UserProfile>> {
        let mut seen = HashSet::new();
        let unique: Vec<UserId> = user_ids
            .iter()
            .filter(|id| seen.insert(*id))
            .cloned()
            .collect();
        if unique.is_empty() {
            return Ok(HashMap::new());
        }

        let profiles = self.ctx.profile_repo().find_by_ids(&unique).await?;
        Ok(profiles
            .into_iter()
            .map(|profile| (profile.user_id.clone(), profile))
            .collect())
    }
}

fn render_reply(
    reply: Post,
    states: &HashMap<PostId, ActionState>,
    profiles: &HashMap<UserId, UserProfile>,
) -> ReplyResponse {
    let liked = states.get(&reply.id).is_some_and(|s| s.liked);
    let author = AuthorFields::from(profiles.get(&reply.author_id));
    ReplyResponse::from(ReplyWithDetails {
        reply,
        author,
        liked,
    })
}
