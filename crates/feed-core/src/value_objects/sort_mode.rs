//! Feed ranking modes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// How a channel feed is ranked.
///
/// `UserBased` surfaces the viewer's own posts first and ranks everyone else
/// by engagement. `IdeasBased` ignores authorship and promotes pinned posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    UserBased,
    IdeasBased,
}

impl SortMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserBased => "user-based",
            Self::IdeasBased => "ideas-based",
        }
    }

    #[inline]
    pub const fn is_ideas_based(self) -> bool {
        matches!(self, Self::IdeasBased)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user-based" => Ok(Self::UserBased),
            "ideas-based" => Ok(Self::IdeasBased),
            other => Err(DomainError::ValidationError(format!(
                "unknown sort mode: {other}"
            ))),
        }
    }
}
