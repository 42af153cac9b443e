//! Unread reply flag
//!
//! A single boolean per (user, channel) held in the shared flag store with a
//! TTL. Replies set it for the parent's author; that author's next feed load
//! clears it. The store is best-effort: every failure here is logged and
//! swallowed.

use feed_core::{ChannelId, UserId};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;

const UNREAD_KEY_PREFIX: &str = "community_comment_unread";
const UNREAD_VALUE: &str = "true";

/// Flag store key for one user in one channel
pub fn unread_flag_key(user_id: &UserId, channel_id: &ChannelId) -> String {
    format!("{UNREAD_KEY_PREFIX}:{user_id}:{channel_id}")
}

pub struct UnreadFlagTracker<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UnreadFlagTracker<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Set (or refresh) the flag for `user_id` in `channel_id`
    #[instrument(skip(self))]
    pub async fn mark(&self, user_id: &UserId, channel_id: &ChannelId) {
        let key = unread_flag_key(user_id, channel_id);
        let ttl = self.ctx.feed_config().unread_flag_ttl();

        match self
            .ctx
            .flag_cache()
            .set_with_expiry(&key, UNREAD_VALUE, ttl)
            .await
        {
            Ok(()) => debug!(%key, ttl_secs = ttl.as_secs(), "Unread flag set"),
            Err(e) => warn!(%key, error = %e, "Failed to set unread flag"),
        }
    }

    /// Read then delete the flag. Returns whether it was set; the caller's
    /// response never depends on it.
    #[instrument(skip(self))]
    pub async fn consume(&self, user_id: &UserId, channel_id: &ChannelId) -> bool {
        let key = unread_flag_key(user_id, channel_id);
        let cache = self.ctx.flag_cache();

        let was_set = match cache.get(&key).await {
            Ok(value) => value.as_deref() == Some(UNREAD_VALUE),
            Err(e) => {
                warn!(%key, error = %e, "Failed to read unread flag");
                false
            }
        };

        if let Err(e) = cache.delete(&key).await {
            warn!(%key, error = %e, "Failed to clear unread flag");
        }

        debug!(%key, was_set, "Unread flag consumed");
        was_set
    }

    /// Read the flag without clearing it; a failed read reports `false`
    #[instrument(skip(self))]
    pub async fn peek(&self, user_id: &UserId, channel_id: &ChannelId) -> bool {
        let key = unread_flag_key(user_id, channel_id);
        match self.ctx.flag_cache().get(&key).await {
            Ok(value) => value.as_deref() == Some(UNREAD_VALUE),
            Err(e) => {
                warn!(%key, error = %e, "Failed to read unread flag");
                false
            }
        }
    }
}
