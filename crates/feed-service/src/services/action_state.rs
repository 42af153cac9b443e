//! Viewer action state lookup

use std::collections::HashMap;

use feed_core::{ActionState, PostId, UserAction, UserId};
use tracing::{instrument, warn};

use super::context::ServiceContext;

/// Fold stored action rows into per-post state.
///
/// Posts without rows are absent; callers read them as `ActionState::default()`.
pub fn fold_actions(actions: Vec<UserAction>) -> HashMap<PostId, ActionState> {
    let mut states: HashMap<PostId, ActionState> = HashMap::new();
    for action in actions {
        states
            .entry(action.post_id)
            .or_default()
            .apply(action.kind, action.value);
    }
    states
}

/// Resolves whether the viewer liked or bookmarked each post
pub struct ActionStateLookup<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActionStateLookup<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Batch lookup for one viewer. Never fails: a store error degrades to
    /// "nothing liked, nothing bookmarked" and is logged.
    #[instrument(skip(self, post_ids), fields(posts = post_ids.len()))]
    pub async fn lookup(
        &self,
        post_ids: &[PostId],
        viewer_id: &UserId,
    ) -> HashMap<PostId, ActionState> {
        if post_ids.is_empty() {
            return HashMap::new();
        }

        match self.ctx.action_repo().find_values(post_ids, viewer_id).await {
            Ok(actions) => fold_actions(actions),
            Err(e) => {
                warn!(error = %e, "Action state lookup failed; defaulting to false");
                HashMap::new()
            }
        }
    }
}
