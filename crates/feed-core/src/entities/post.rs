//! Post entity - a top-level comment or a reply within a channel feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ActionKind;
use crate::error::DomainError;
use crate::value_objects::{ChannelId, PostId, UserId};

/// Body written over a post when its author deletes it
pub const DELETED_POST_CONTENT: &str = "This comment was deleted by the post author.";

/// Maximum number of replies shown inline under a feed post
pub const REPLY_PREVIEW_LIMIT: usize = 3;

/// Top-level comment or reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostKind {
    Comment,
    Reply,
}

impl PostKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "COMMENT",
            Self::Reply => "REPLY",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "COMMENT" => Ok(Self::Comment),
            "REPLY" => Ok(Self::Reply),
            other => Err(DomainError::ValidationError(format!(
                "unknown post kind: {other}"
            ))),
        }
    }
}

/// Lifecycle status; deleted posts are rewritten, never removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    #[default]
    Published,
    Deleted,
}

impl PostStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "PUBLISHED",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PUBLISHED" => Ok(Self::Published),
            "DELETED" => Ok(Self::Deleted),
            other => Err(DomainError::ValidationError(format!(
                "unknown post status: {other}"
            ))),
        }
    }
}

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub content: String,
    pub kind: PostKind,
    pub parent_id: Option<PostId>,
    pub is_pinned: bool,
    pub like_count: i64,
    pub bookmark_count: i64,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.status == PostStatus::Deleted
    }

    #[inline]
    pub fn is_reply(&self) -> bool {
        self.kind == PostKind::Reply
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author_id == user_id
    }

    /// Counter column that tracks the given action
    pub fn counter(&self, kind: ActionKind) -> i64 {
        match kind {
            ActionKind::Like => self.like_count,
            ActionKind::Bookmark => self.bookmark_count,
        }
    }

    /// Check that the viewer may toggle `kind` on this post
    pub fn ensure_actionable(&self, kind: ActionKind) -> Result<(), DomainError> {
        if kind == ActionKind::Bookmark && self.is_reply() {
            return Err(DomainError::ReplyNotBookmarkable);
        }
        if self.is_deleted() {
            return Err(DomainError::PostDeleted);
        }
        Ok(())
    }

    /// Rewrite the body and flip the status
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.content = DELETED_POST_CONTENT.to_string();
        self.status = PostStatus::Deleted;
        self.deleted_at = Some(at);
        self.updated_at = at;
    }
}

/// Data needed to insert a post; the store assigns id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub content: String,
    pub kind: PostKind,
    pub parent_id: Option<PostId>,
}

impl NewPost {
    pub fn comment(channel_id: ChannelId, author_id: UserId, content: String) -> Self {
        Self {
            channel_id,
            author_id,
            content,
            kind: PostKind::Comment,
            parent_id: None,
        }
    }

    pub fn reply(channel_id: ChannelId, author_id: UserId, content: String, parent_id: PostId) -> Self {
        Self {
            channel_id,
            author_id,
            content,
            kind: PostKind::Reply,
            parent_id: Some(parent_id),
        }
    }
}
