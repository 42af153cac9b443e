//! Reply preview selection
//!
//! Both the inline preview under a feed post and the full reply list of one
//! post are ranked with the same `ReplyRanking`, so the two views agree on
//! which replies matter most.

use std::collections::HashMap;

use feed_core::{Post, PostId, ReplyRanking, SortMode, REPLY_PREVIEW_LIMIT};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Group replies by parent and keep the best `limit` of each under `ranking`.
///
/// Input order does not matter; each group comes back in ranking order.
pub fn select_top(
    candidates: Vec<Post>,
    ranking: ReplyRanking,
    limit: usize,
) -> HashMap<PostId, Vec<Post>> {
    let mut groups: HashMap<PostId, Vec<Post>> = HashMap::new();
    for reply in candidates {
        if let Some(parent_id) = reply.parent_id {
            groups.entry(parent_id).or_default().push(reply);
        }
    }

    for replies in groups.values_mut() {
        replies.sort_by(|a, b| ranking.compare(a, b));
        replies.truncate(limit);
    }
    groups
}

/// Reorder a chosen preview set for display: deleted last, then oldest first
pub fn arrange_for_display(replies: &mut [Post]) {
    replies.sort_by(ReplyRanking::display_order);
}

pub struct ReplyPreviewSelector<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyPreviewSelector<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Up to three replies per parent, in display order.
    ///
    /// The bookmarks view never carries previews.
    #[instrument(skip(self, parent_ids), fields(parents = parent_ids.len()))]
    pub async fn previews(
        &self,
        parent_ids: &[PostId],
        sort_mode: SortMode,
        bookmarks_only: bool,
    ) -> ServiceResult<HashMap<PostId, Vec<Post>>> {
        if bookmarks_only || parent_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ranking = ReplyRanking::for_mode(sort_mode);
        let candidates = self
            .ctx
            .post_repo()
            .find_reply_candidates(parent_ids, ranking, REPLY_PREVIEW_LIMIT)
            .await?;
        debug!(candidates = candidates.len(), "Fetched reply candidates");

        let mut previews = select_top(candidates, ranking, REPLY_PREVIEW_LIMIT);
        for replies in previews.values_mut() {
            arrange_for_display(replies);
        }
        Ok(previews)
    }

    /// One page of every reply under `parent_id`, in ranking order
    #[instrument(skip(self))]
    pub async fn full_list(
        &self,
        parent_id: PostId,
        sort_mode: SortMode,
        limit: i64,
        offset: i64,
    ) -> ServiceResult<Vec<Post>> {
        let ranking = ReplyRanking::for_mode(sort_mode);
        let mut replies = self
            .ctx
            .post_repo()
            .find_replies_page(parent_id, ranking, limit, offset)
            .await?;

        replies.sort_by(|a, b| ranking.compare(a, b));
        Ok(replies)
    }
}
