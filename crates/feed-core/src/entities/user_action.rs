//! UserAction entity - a viewer's like/bookmark toggle on a post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::{PostId, UserId};

/// Toggleable action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Like,
    Bookmark,
}

impl ActionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Bookmark => "bookmark",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = DomainError;

    /// `unlike` is the same toggle as `like`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "like" | "unlike" => Ok(Self::Like),
            "bookmark" => Ok(Self::Bookmark),
            other => Err(DomainError::ValidationError(format!(
                "unknown action: {other}"
            ))),
        }
    }
}

/// Stored action row; absence of a row means `value = false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAction {
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: ActionKind,
    pub value: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Viewer-specific state attached to a rendered post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionState {
    pub liked: bool,
    pub bookmarked: bool,
}

impl ActionState {
    pub fn apply(&mut self, kind: ActionKind, value: bool) {
        match kind {
            ActionKind::Like => self.liked = value,
            ActionKind::Bookmark => self.bookmarked = value,
        }
    }
}
