//! # feed-service
//!
//! Application layer: the feed composition pipeline, post write operations
//! author profiles and the DTOs exchanged with the HTTP layer.

pub mod dto;
pub mod services;

pub use services::{
    ActionStateLookup, FeedPageQuery, FeedService, PagePlan, PageWindowPlanner, PostService,
    PostSourceReader, ProfileService, RepliesQuery, ReplyPreviewSelector, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UnreadFlagTracker,
};

pub use dto::{
    ApiResponse, CreatePostRequest, CreatedPostResponse, FeedPageResponse, FeedPostResponse,
    HealthResponse, PaginatedResponse, PaginationResponse, ProfileResponse, ReadinessResponse,
    RepliesPageResponse, ReplyResponse, ReportPostRequest, ReportResponse, ToggleActionResponse,
    UnreadStatusResponse, UpsertProfileRequest,
};
