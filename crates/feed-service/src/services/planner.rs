//! Page window planning
//!
//! A viewer's own posts are surfaced ahead of every community post. The
//! planner works out how much of the requested window each source fills and
//! where to start reading in each one, so both sources can be fetched with a
//! bounded LIMIT/OFFSET instead of merging everything in memory.

use feed_core::{ChannelId, SortMode, UserId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::post_source::PostSourceReader;

/// Slot split and offsets for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagePlan {
    pub own_slots: i64,
    pub own_offset: i64,
    pub community_slots: i64,
    pub community_offset: i64,
}

impl PagePlan {
    /// Split page `page` (1-based) of `page_size` items given `own_count`
    /// own posts in front of the community source.
    pub fn compute(own_count: i64, page: i64, page_size: i64) -> Self {
        let page_size = page_size.max(0);
        let own_count = own_count.max(0);
        let skipped = (page.max(1) - 1).saturating_mul(page_size);

        let own_slots = own_count.saturating_sub(skipped).clamp(0, page_size);
        let own_offset = if own_slots > 0 { skipped } else { 0 };

        Self {
            own_slots,
            own_offset,
            community_slots: page_size - own_slots,
            community_offset: skipped.saturating_sub(own_count).max(0),
        }
    }

    #[inline]
    pub fn page_size(&self) -> i64 {
        self.own_slots + self.community_slots
    }
}

/// Decides which source fills which part of a feed page
pub struct PageWindowPlanner<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PageWindowPlanner<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Plan one page for the viewer
    ///
    /// Ideas-based and bookmarks-only views have no own-post tier, so the
    /// whole page comes from the community source.
    #[instrument(skip(self))]
    pub async fn plan(
        &self,
        channel_id: &ChannelId,
        viewer_id: &UserId,
        page: i64,
        page_size: i64,
        sort_mode: SortMode,
        bookmarks_only: bool,
    ) -> ServiceResult<PagePlan> {
        let own_count = PostSourceReader::new(self.ctx)
            .own_count(channel_id, viewer_id, sort_mode, bookmarks_only)
            .await?;

        let plan = PagePlan::compute(own_count, page, page_size);
        debug!(own_count, ?plan, "Planned feed window");
        Ok(plan)
    }
}
