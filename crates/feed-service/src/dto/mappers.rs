//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, Utc};
use feed_core::{ActionKind, PaginationWindow, Post, Report, ToggleOutcome, UserProfile};

use super::responses::{
    CreatedPostResponse, FeedPostResponse, PaginationResponse, ProfileResponse, ReplyResponse,
    ReportResponse, ToggleActionResponse,
};

/// Unix seconds as a string
pub fn unix_timestamp(at: DateTime<Utc>) -> String {
    at.timestamp().to_string()
}

impl From<PaginationWindow> for PaginationResponse {
    fn from(window: PaginationWindow) -> Self {
        Self {
            current_page: window.current_page,
            total_pages: window.total_pages,
            single_page_record_count: window.records_on_page,
            total_record_count: window.total_records,
        }
    }
}

// ============================================================================
// Feed Mappers
// ============================================================================

/// Author display fields; an unknown author renders with empty fields
#[derive(Debug, Clone, Default)]
pub struct AuthorFields {
    pub name: String,
    pub phone: String,
    pub avatar: String,
}

impl From<Option<&UserProfile>> for AuthorFields {
    fn from(profile: Option<&UserProfile>) -> Self {
        profile
            .map(|p| Self {
                name: p.display_name(),
                phone: p.phone.clone(),
                avatar: p.avatar_url.clone(),
            })
            .unwrap_or_default()
    }
}

/// Reply joined with its author and the viewer's like state
pub struct ReplyWithDetails {
    pub reply: Post,
    pub author: AuthorFields,
    pub liked: bool,
}

impl From<ReplyWithDetails> for ReplyResponse {
    fn from(details: ReplyWithDetails) -> Self {
        let reply = details.reply;
        Self {
            id: reply.id.into_inner(),
            content: reply.content,
            kind: reply.kind.to_string(),
            user_id: reply.author_id.into_inner(),
            like_count: reply.like_count,
            status: reply.status.to_string(),
            avatar: details.author.avatar,
            user_name: details.author.name,
            user_phone: details.author.phone,
            created_at: unix_timestamp(reply.created_at),
            updated_at: unix_timestamp(reply.updated_at),
            is_liked: details.liked,
        }
    }
}

/// Top-level post joined with everything the feed shows about it
pub struct PostWithDetails {
    pub post: Post,
    pub author: AuthorFields,
    pub liked: bool,
    pub bookmarked: bool,
    pub replies_count: i64,
    pub replies: Vec<ReplyResponse>,
}

impl From<PostWithDetails> for FeedPostResponse {
    fn from(details: PostWithDetails) -> Self {
        let post = details.post;
        Self {
            id: post.id.into_inner(),
            avatar: details.author.avatar,
            user_name: details.author.name,
            user_phone: details.author.phone,
            content: post.content,
            kind: post.kind.to_string(),
            like_count: post.like_count,
            status: post.status.to_string(),
            user_id: post.author_id.into_inner(),
            created_at: unix_timestamp(post.created_at),
            updated_at: unix_timestamp(post.updated_at),
            is_liked: details.liked,
            replies_count: details.replies_count,
            bookmark_count: post.bookmark_count,
            is_bookmarked: details.bookmarked,
            is_pinned: post.is_pinned,
            replies: details.replies,
        }
    }
}

// ============================================================================
// Write Mappers
// ============================================================================

impl CreatedPostResponse {
    pub fn new(post: Post, author: AuthorFields) -> Self {
        Self {
            user_name: author.name,
            profile_image_url: author.avatar,
            user_id: post.author_id.into_inner(),
            user_phone: author.phone,
            post_id: post.id.into_inner(),
            channel_id: post.channel_id.into_inner(),
            content: post.content,
            comment_type: post.kind.to_string(),
            parent_id: post.parent_id.map_or(0, |id| id.into_inner()),
            created_at: unix_timestamp(post.created_at),
            updated_at: unix_timestamp(post.updated_at),
        }
    }
}

impl ToggleActionResponse {
    pub fn new(post: &Post, kind: ActionKind, outcome: ToggleOutcome) -> Self {
        Self {
            post_id: post.id.into_inner(),
            action: kind.to_string(),
            value: outcome.value,
            count: outcome.count,
        }
    }
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            post_id: report.post_id.into_inner(),
            reported_by: report.reported_by.into_inner(),
            master_report_id: report.master_report_id,
            created_at: unix_timestamp(report.created_at),
        }
    }
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_name: profile.display_name(),
            user_id: profile.user_id.into_inner(),
            first_name: profile.first_name,
            middle_name: profile.middle_name,
            last_name: profile.last_name,
            user_phone: profile.phone,
            profile_image_url: profile.avatar_url,
        }
    }
}
