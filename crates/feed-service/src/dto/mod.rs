//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreatePostRequest, ReportPostRequest, UpsertProfileRequest, MAX_CONTENT_LENGTH,
};

pub use responses::{
    ApiResponse, CreatedPostResponse, FeedPageResponse, FeedPostResponse, HealthChecks,
    HealthResponse, PaginatedResponse, PaginationResponse, ProfileResponse, ReadinessResponse,
    RepliesPageResponse, ReplyResponse, ReportResponse, ToggleActionResponse,
    UnreadStatusResponse,
};

pub use mappers::{unix_timestamp, AuthorFields, PostWithDetails, ReplyWithDetails};
