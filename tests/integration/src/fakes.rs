//! In-memory implementations of the storage and flag-cache ports
//!
//! `MemoryStore` backs every repository trait from one shared table set so
//! that toggles, deletes and replies are visible to the read paths exactly as
//! they would be with Postgres. Timestamps come from a logical clock that
//! advances one second per write, which keeps orderings deterministic.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use feed_core::{
    ActionKind, AuthorScope, ChannelId, DomainError, FlagCache, NewPost, NewReport, Post,
    PostId, PostKind, PostQuery, PostRepository, PostStatus, RepoResult, ReplyRanking, Report,
    ReportRepository, ToggleOutcome, UserAction, UserActionRepository, UserId, UserProfile,
    UserProfileRepository,
};
use tokio::sync::Mutex;

/// Switches that make individual lookups fail
#[derive(Debug, Default)]
pub struct Failures {
    pub action_lookup: AtomicBool,
    pub reply_counts: AtomicBool,
    pub reply_candidates: AtomicBool,
    pub profiles: AtomicBool,
}

impl Failures {
    fn check(flag: &AtomicBool, what: &str) -> RepoResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(DomainError::DatabaseError(format!("injected {what} failure")))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    posts: Vec<Post>,
    actions: Vec<UserAction>,
    profiles: HashMap<UserId, UserProfile>,
    reports: Vec<Report>,
    next_post_id: i64,
    next_report_id: i64,
    tick: i64,
}

impl Tables {
    fn now(&mut self) -> DateTime<Utc> {
        self.tick += 1;
        epoch() + chrono::Duration::seconds(self.tick)
    }

    fn post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    fn top_level<'a>(&'a self, channel_id: &'a ChannelId) -> impl Iterator<Item = &'a Post> {
        self.posts
            .iter()
            .filter(move |p| &p.channel_id == channel_id && p.kind == PostKind::Comment)
    }

    fn replies_of(&self, parent_id: PostId) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.parent_id == Some(parent_id))
            .cloned()
            .collect()
    }

    /// Active bookmark rows of a user, newest bookmark first
    fn bookmarks(&self, channel_id: &ChannelId, user_id: &UserId) -> Vec<Post> {
        let mut rows: Vec<&UserAction> = self
            .actions
            .iter()
            .filter(|a| &a.user_id == user_id && a.kind == ActionKind::Bookmark && a.value)
            .collect();
        rows.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.post_id.cmp(&a.post_id))
        });
        rows.into_iter()
            .filter_map(|a| {
                self.top_level(channel_id)
                    .find(|p| p.id == a.post_id)
                    .cloned()
            })
            .collect()
    }
}

/// Fixed origin of the logical clock
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn window(posts: Vec<Post>, limit: i64, offset: i64) -> Vec<Post> {
    posts
        .into_iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}

/// Shared in-memory tables implementing every repository port
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    pub failures: Failures,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register an author profile
    pub async fn add_profile(&self, profile: UserProfile) {
        self.tables
            .lock()
            .await
            .profiles
            .insert(profile.user_id.clone(), profile);
    }

    /// Insert a post directly, bypassing service validation
    pub async fn insert(&self, new_post: NewPost) -> Post {
        let mut tables = self.tables.lock().await;
        let at = tables.now();
        tables.next_post_id += 1;
        let post = Post {
            id: PostId::new(tables.next_post_id),
            channel_id: new_post.channel_id,
            author_id: new_post.author_id,
            content: new_post.content,
            kind: new_post.kind,
            parent_id: new_post.parent_id,
            is_pinned: false,
            like_count: 0,
            bookmark_count: 0,
            status: PostStatus::Published,
            created_at: at,
            updated_at: at,
            deleted_at: None,
        };
        tables.posts.push(post.clone());
        post
    }

    /// Mutate a stored post in place
    pub async fn update(&self, id: PostId, f: impl FnOnce(&mut Post)) {
        if let Some(post) = self.tables.lock().await.post_mut(id) {
            f(post);
        }
    }

    pub async fn post(&self, id: PostId) -> Option<Post> {
        self.tables
            .lock()
            .await
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn reports(&self) -> Vec<Report> {
        self.tables.lock().await.reports.clone()
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.post(id).await)
    }

    async fn find_page(&self, query: &PostQuery) -> RepoResult<Vec<Post>> {
        let tables = self.tables.lock().await;
        let mut posts: Vec<Post> = tables
            .top_level(&query.channel_id)
            .filter(|p| query.author.matches(&p.author_id))
            .cloned()
            .collect();
        posts.sort_by(|a, b| query.ordering.compare(a, b));
        Ok(window(posts, query.limit, query.offset))
    }

    async fn count(&self, channel_id: &ChannelId, author: &AuthorScope) -> RepoResult<i64> {
        let tables = self.tables.lock().await;
        Ok(tables
            .top_level(channel_id)
            .filter(|p| author.matches(&p.author_id))
            .count() as i64)
    }

    async fn find_bookmarked_page(
        &self,
        channel_id: &ChannelId,
        user_id: &UserId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Post>> {
        let tables = self.tables.lock().await;
        Ok(window(tables.bookmarks(channel_id, user_id), limit, offset))
    }

    async fn count_bookmarked(&self, channel_id: &ChannelId, user_id: &UserId) -> RepoResult<i64> {
        let tables = self.tables.lock().await;
        Ok(tables.bookmarks(channel_id, user_id).len() as i64)
    }

    async fn find_reply_candidates(
        &self,
        parent_ids: &[PostId],
        ranking: ReplyRanking,
        per_parent: usize,
    ) -> RepoResult<Vec<Post>> {
        Failures::check(&self.failures.reply_candidates, "reply candidate")?;
        let tables = self.tables.lock().await;
        let mut rows = Vec::new();
        for parent_id in parent_ids {
            let mut replies = tables.replies_of(*parent_id);
            replies.sort_by(|a, b| ranking.compare(a, b));
            replies.truncate(per_parent);
            rows.extend(replies);
        }
        // Callers must not rely on row order
        rows.reverse();
        Ok(rows)
    }

    async fn find_replies_page(
        &self,
        parent_id: PostId,
        ranking: ReplyRanking,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Post>> {
        let tables = self.tables.lock().await;
        let mut replies = tables.replies_of(parent_id);
        replies.sort_by(|a, b| ranking.compare(a, b));
        Ok(window(replies, limit, offset))
    }

    async fn count_replies(&self, parent_ids: &[PostId]) -> RepoResult<HashMap<PostId, i64>> {
        Failures::check(&self.failures.reply_counts, "reply count")?;
        let tables = self.tables.lock().await;
        let mut counts = HashMap::new();
        for parent_id in parent_ids {
            let n = tables.replies_of(*parent_id).len() as i64;
            if n > 0 {
                counts.insert(*parent_id, n);
            }
        }
        Ok(counts)
    }

    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        Ok(self.insert(post.clone()).await)
    }

    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> RepoResult<()> {
        let mut tables = self.tables.lock().await;
        let post = tables.post_mut(id).ok_or(DomainError::PostNotFound(id))?;
        post.mark_deleted(deleted_at);
        Ok(())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[async_trait]
impl UserActionRepository for MemoryStore {
    async fn find_values(
        &self,
        post_ids: &[PostId],
        user_id: &UserId,
    ) -> RepoResult<Vec<UserAction>> {
        Failures::check(&self.failures.action_lookup, "action lookup")?;
        let tables = self.tables.lock().await;
        Ok(tables
            .actions
            .iter()
            .filter(|a| &a.user_id == user_id && post_ids.contains(&a.post_id))
            .cloned()
            .collect())
    }

    async fn toggle(
        &self,
        post_id: PostId,
        user_id: &UserId,
        kind: ActionKind,
    ) -> RepoResult<ToggleOutcome> {
        let mut tables = self.tables.lock().await;
        let at = tables.now();

        let value = match tables
            .actions
            .iter_mut()
            .find(|a| a.post_id == post_id && &a.user_id == user_id && a.kind == kind)
        {
            Some(row) => {
                row.value = !row.value;
                row.updated_at = at;
                row.value
            }
            None => {
                tables.actions.push(UserAction {
                    post_id,
                    user_id: user_id.clone(),
                    kind,
                    value: true,
                    created_at: at,
                    updated_at: at,
                });
                true
            }
        };

        let post = tables
            .post_mut(post_id)
            .ok_or(DomainError::PostNotFound(post_id))?;
        let delta = if value { 1 } else { -1 };
        let counter = match kind {
            ActionKind::Like => &mut post.like_count,
            ActionKind::Bookmark => &mut post.bookmark_count,
        };
        *counter = (*counter + delta).max(0);

        Ok(ToggleOutcome {
            value,
            count: post.counter(kind),
        })
    }
}

#[async_trait]
impl UserProfileRepository for MemoryStore {
    async fn find_by_ids(&self, user_ids: &[UserId]) -> RepoResult<Vec<UserProfile>> {
        Failures::check(&self.failures.profiles, "profile")?;
        let tables = self.tables.lock().await;
        Ok(user_ids
            .iter()
            .filter_map(|id| tables.profiles.get(id).cloned())
            .collect())
    }

    async fn upsert(&self, profile: &UserProfile) -> RepoResult<UserProfile> {
        Failures::check(&self.failures.profiles, "profile")?;
        self.tables
            .lock()
            .await
            .profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile.clone())
    }
}

#[async_trait]
impl ReportRepository for MemoryStore {
    async fn create(&self, report: &NewReport) -> RepoResult<Report> {
        let mut tables = self.tables.lock().await;
        let at = tables.now();
        tables.next_report_id += 1;
        let stored = Report {
            id: tables.next_report_id,
            post_id: report.post_id,
            reported_by: report.reported_by.clone(),
            master_report_id: report.master_report_id,
            created_at: at,
        };
        tables.reports.push(stored.clone());
        Ok(stored)
    }
}

/// In-memory flag store; TTLs are recorded but never expire
#[derive(Debug, Default)]
pub struct MemoryFlagCache {
    entries: Mutex<HashMap<String, (String, Duration)>>,
    pub unavailable: AtomicBool,
}

impl MemoryFlagCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        self.entries.lock().await.get(key).map(|(_, ttl)| *ttl)
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.lock().await.contains_key(key)
    }

    fn check(&self) -> RepoResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::CacheError("flag store unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FlagCache for MemoryFlagCache {
    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> RepoResult<()> {
        self.check()?;
        self.entries
            .lock()
            .await
            .insert(key.to_string(), (value.to_string(), ttl));
        Ok(())
    }

    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        self.check()?;
        Ok(self
            .entries
            .lock()
            .await
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn delete(&self, key: &str) -> RepoResult<bool> {
        self.check()?;
        Ok(self.entries.lock().await.remove(key).is_some())
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check()
    }
}
