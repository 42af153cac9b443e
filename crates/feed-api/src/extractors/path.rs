//! Path parameter extractors
//!
//! Raw path segments are deserialized as strings and parsed into typed ids
//! on access, so a malformed id becomes a 400 rather than a routing miss.

use feed_core::{ActionKind, ChannelId, PostId};
use serde::Deserialize;

use crate::response::ApiError;

fn parse_channel_id(raw: &str) -> Result<ChannelId, ApiError> {
    ChannelId::parse(raw).map_err(|_| ApiError::invalid_path("Invalid channel_id"))
}

fn parse_post_id(raw: &str) -> Result<PostId, ApiError> {
    PostId::parse(raw).map_err(|_| ApiError::invalid_path("Invalid post_id format"))
}

/// Path parameters with channel_id
#[derive(Debug, Deserialize)]
pub struct ChannelPath {
    pub channel_id: String,
}

impl ChannelPath {
    pub fn channel_id(&self) -> Result<ChannelId, ApiError> {
        parse_channel_id(&self.channel_id)
    }
}

/// Path parameters with channel_id and post_id
#[derive(Debug, Deserialize)]
pub struct ChannelPostPath {
    pub channel_id: String,
    pub post_id: String,
}

impl ChannelPostPath {
    pub fn channel_id(&self) -> Result<ChannelId, ApiError> {
        parse_channel_id(&self.channel_id)
    }

    pub fn post_id(&self) -> Result<PostId, ApiError> {
        parse_post_id(&self.post_id)
    }
}

/// Path parameters for toggling an action on a post
#[derive(Debug, Deserialize)]
pub struct PostActionPath {
    pub channel_id: String,
    pub post_id: String,
    pub action: String,
}

impl PostActionPath {
    pub fn channel_id(&self) -> Result<ChannelId, ApiError> {
        parse_channel_id(&self.channel_id)
    }

    pub fn post_id(&self) -> Result<PostId, ApiError> {
        parse_post_id(&self.post_id)
    }

    /// `like`, `unlike` or `bookmark`
    pub fn action(&self) -> Result<ActionKind, ApiError> {
        self.action
            .parse()
            .map_err(|_| ApiError::invalid_path(format!("Unknown action: {}", self.action)))
    }
}

/// Path parameters with post_id only
#[derive(Debug, Deserialize)]
pub struct PostPath {
    pub post_id: String,
}

impl PostPath {
    pub fn post_id(&self) -> Result<PostId, ApiError> {
        parse_post_id(&self.post_id)
    }
}
