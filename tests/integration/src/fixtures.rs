//! Test fixtures and data generators
//!
//! `FeedFixture` wires the in-memory fakes into a `ServiceContext` and offers
//! shorthands for seeding channels with posts, replies and profiles.

use std::sync::Arc;

use feed_common::FeedConfig;
use feed_core::{ChannelId, NewPost, Post, PostId, UserId, UserProfile};
use feed_service::{ServiceContext, ServiceContextBuilder};

use crate::fakes::{MemoryFlagCache, MemoryStore};

/// Channel used by most tests
pub const CHANNEL: &str = "general";

pub fn channel() -> ChannelId {
    ChannelId::new(CHANNEL)
}

pub fn user(id: &str) -> UserId {
    UserId::new(id)
}

/// Profile with a first and last name
pub fn profile(id: &str, first: &str, last: &str) -> UserProfile {
    UserProfile {
        user_id: UserId::new(id),
        first_name: first.to_string(),
        last_name: last.to_string(),
        phone: format!("+1-555-{id}"),
        avatar_url: format!("https://cdn.example.com/{id}.png"),
        ..Default::default()
    }
}

/// Fakes plus the context built on them
pub struct FeedFixture {
    pub store: Arc<MemoryStore>,
    pub flags: Arc<MemoryFlagCache>,
    pub ctx: ServiceContext,
}

impl FeedFixture {
    pub fn new() -> Self {
        Self::with_config(FeedConfig::default())
    }

    pub fn with_config(feed_config: FeedConfig) -> Self {
        let store = MemoryStore::new();
        let flags = MemoryFlagCache::new();
        let ctx = build_context(&store, &flags, feed_config);
        Self { store, flags, ctx }
    }

    /// Top-level post by `author` in the default channel
    pub async fn post(&self, author: &str, content: &str) -> Post {
        self.store
            .insert(NewPost::comment(
                channel(),
                user(author),
                content.to_string(),
            ))
            .await
    }

    /// `count` top-level posts by `author`, oldest first
    pub async fn posts(&self, author: &str, count: usize) -> Vec<Post> {
        let mut posts = Vec::with_capacity(count);
        for i in 0..count {
            posts.push(self.post(author, &format!("{author} post {i}")).await);
        }
        posts
    }

    /// Reply by `author` under `parent`
    pub async fn reply(&self, parent: PostId, author: &str, content: &str) -> Post {
        self.store
            .insert(NewPost::reply(
                channel(),
                user(author),
                content.to_string(),
                parent,
            ))
            .await
    }
}

impl Default for FeedFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble a context where every port is served by the fakes
pub fn build_context(
    store: &Arc<MemoryStore>,
    flags: &Arc<MemoryFlagCache>,
    feed_config: FeedConfig,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .post_repo(store.clone())
        .action_repo(store.clone())
        .profile_repo(store.clone())
        .report_repo(store.clone())
        .flag_cache(flags.clone())
        .feed_config(feed_config)
        .build()
        .expect("in-memory context is complete")
}

/// Raw id of each post, in order
pub fn ids(posts: &[Post]) -> Vec<i64> {
    posts.iter().map(|p| p.id.into_inner()).collect()
}
