//! Ordering rules for feed posts and replies
//!
//! Every ordering ends with an id tie-break so that LIMIT/OFFSET windows over
//! the same data never overlap or leave gaps.

use std::cmp::Ordering;

use super::SortMode;
use crate::entities::Post;

/// Ordering applied to a top-level post source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostOrdering {
    /// Deleted last, then most recently updated
    Recency,
    /// Deleted last, then most liked, then most recently updated
    Engagement,
    /// Pinned first, then deleted last, then most recently updated
    PinnedFirst,
}

impl PostOrdering {
    pub fn compare(self, a: &Post, b: &Post) -> Ordering {
        let tier = match self {
            Self::Recency => deleted_last(a, b),
            Self::Engagement => deleted_last(a, b).then_with(|| b.like_count.cmp(&a.like_count)),
            Self::PinnedFirst => pinned_first(a, b).then_with(|| deleted_last(a, b)),
        };
        tier.then_with(|| newest_first(a, b))
    }
}

/// Ranking of replies under one parent.
///
/// Used both to pick the preview set and to order the full reply list, so the
/// two views always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReplyRanking {
    pub pinned_first: bool,
}

impl ReplyRanking {
    pub const fn for_mode(mode: SortMode) -> Self {
        Self {
            pinned_first: mode.is_ideas_based(),
        }
    }

    /// Selection order: optional pinned tier, deleted last, newest first
    pub fn compare(self, a: &Post, b: &Post) -> Ordering {
        let pinned = if self.pinned_first {
            pinned_first(a, b)
        } else {
            Ordering::Equal
        };
        pinned
            .then_with(|| deleted_last(a, b))
            .then_with(|| newest_first(a, b))
    }

    /// Display order for a chosen preview set: deleted last, oldest first
    pub fn display_order(a: &Post, b: &Post) -> Ordering {
        deleted_last(a, b)
            .then_with(|| a.updated_at.cmp(&b.updated_at))
            .then_with(|| a.id.cmp(&b.id))
    }
}

fn deleted_last(a: &Post, b: &Post) -> Ordering {
    a.is_deleted().cmp(&b.is_deleted())
}

fn pinned_first(a: &Post, b: &Post) -> Ordering {
    b.is_pinned.cmp(&a.is_pinned)
}

fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.updated_at
        .cmp(&a.updated_at)
        .then_with(|| b.id.cmp(&a.id))
}
