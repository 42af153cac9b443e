//! SQL ORDER BY clauses for the domain orderings
//!
//! Each clause mirrors the comparator of the same name in feed-core and
//! expects the posts table to be aliased as `p`.

use feed_core::value_objects::{PostOrdering, ReplyRanking};

const DELETED_LAST: &str = "(p.status = 'DELETED') ASC";
const NEWEST_FIRST: &str = "p.updated_at DESC, p.id DESC";

pub fn post_order_clause(ordering: PostOrdering) -> String {
    match ordering {
        PostOrdering::Recency => format!("{DELETED_LAST}, {NEWEST_FIRST}"),
        PostOrdering::Engagement => format!("{DELETED_LAST}, p.like_count DESC, {NEWEST_FIRST}"),
        PostOrdering::PinnedFirst => format!("p.is_pinned DESC, {DELETED_LAST}, {NEWEST_FIRST}"),
    }
}

/// Shared by the preview window and the full reply list
pub fn reply_order_clause(ranking: ReplyRanking) -> String {
    if ranking.pinned_first {
        format!("p.is_pinned DESC, {DELETED_LAST}, {NEWEST_FIRST}")
    } else {
        format!("{DELETED_LAST}, {NEWEST_FIRST}")
    }
}
