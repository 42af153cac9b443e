//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Timestamps are
//! rendered as Unix seconds in strings, the format feed clients already parse.

use chrono::{DateTime, Utc};
use feed_core::PaginationWindow;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Page of data with offset pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: T,
    pub pagination: PaginationResponse,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: T, window: PaginationWindow) -> Self {
        Self {
            data,
            pagination: PaginationResponse::from(window),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationResponse {
    pub current_page: i64,
    pub total_pages: i64,
    pub single_page_record_count: i64,
    pub total_record_count: i64,
}

// ============================================================================
// Feed Responses
// ============================================================================

/// Top-level post rendered for one viewer
#[derive(Debug, Clone, Serialize)]
pub struct FeedPostResponse {
    pub id: i64,
    pub avatar: String,
    pub user_name: String,
    pub user_phone: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub like_count: i64,
    pub status: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_liked: bool,
    pub replies_count: i64,
    pub bookmark_count: i64,
    pub is_bookmarked: bool,
    pub is_pinned: bool,
    pub replies: Vec<ReplyResponse>,
}

/// Reply rendered for one viewer; replies carry no bookmark state
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub id: i64,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user_id: String,
    pub like_count: i64,
    pub status: String,
    pub avatar: String,
    pub user_name: String,
    pub user_phone: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_liked: bool,
}

/// Feed page: ordered posts plus pagination
pub type FeedPageResponse = PaginatedResponse<Vec<FeedPostResponse>>;

/// One post with a page of its replies in `replies`
pub type RepliesPageResponse = PaginatedResponse<FeedPostResponse>;

// ============================================================================
// Write Responses
// ============================================================================

/// Newly created post with its author's display fields
#[derive(Debug, Clone, Serialize)]
pub struct CreatedPostResponse {
    pub user_name: String,
    pub profile_image_url: String,
    pub user_id: String,
    pub user_phone: String,
    pub post_id: i64,
    pub channel_id: String,
    pub content: String,
    pub comment_type: String,
    pub parent_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Result of flipping a like or bookmark
#[derive(Debug, Clone, Serialize)]
pub struct ToggleActionResponse {
    pub post_id: i64,
    pub action: String,
    pub value: bool,
    pub count: i64,
}

/// Filed moderation report
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: i64,
    pub post_id: i64,
    pub reported_by: String,
    pub master_report_id: i64,
    pub created_at: String,
}

/// Stored author display fields
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user_id: String,
    pub user_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub user_phone: String,
    pub profile_image_url: String,
}

/// Whether the viewer has unseen replies in a channel
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UnreadStatusResponse {
    pub is_unread: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
