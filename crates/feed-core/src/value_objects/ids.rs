//! Identifiers for posts, users and channels
//!
//! Post ids are database-assigned positive integers. User and channel ids are
//! opaque strings issued by the identity and channel services.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric post identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(i64);

impl PostId {
    /// Create a PostId from a raw value without validation
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation; only positive integers are valid
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(IdParseError::InvalidPostId(s.to_string())),
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PostId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<PostId> for i64 {
    fn from(id: PostId) -> Self {
        id.0
    }
}

/// Error when parsing an identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid post id: {0:?}")]
    InvalidPostId(String),

    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("channel id must not be empty")]
    EmptyChannelId,
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $empty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a trusted value (e.g. a database column)
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse untrusted input, rejecting blank values
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(IdParseError::$empty);
                }
                Ok(Self(trimmed.to_string()))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Opaque user identifier resolved by the identity layer
    UserId,
    EmptyUserId
);

string_id!(
    /// Channel (discussion board or event) that scopes a feed
    ChannelId,
    EmptyChannelId
);
