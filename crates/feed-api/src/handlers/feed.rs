//! Feed read handlers
//!
//! Endpoints for channel feed pages, reply lists and the unread flag.

use axum::{
    extract::{Path, State},
    Json,
};
use feed_service::{
    ApiResponse, FeedPageQuery, FeedPageResponse, FeedService, RepliesPageResponse, RepliesQuery,
    UnreadStatusResponse,
};

use crate::extractors::{ChannelPath, ChannelPostPath, PageRequest, Viewer};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get one page of a channel feed
///
/// GET /channels/{channel_id}/posts
pub async fn get_feed(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(path): Path<ChannelPath>,
    page: PageRequest,
) -> ApiResult<Json<FeedPageResponse>> {
    let query = FeedPageQuery {
        channel_id: path.channel_id()?,
        viewer_id: viewer.user_id,
        page: page.page,
        page_size: page.limit,
        sort_mode: page.sort_mode,
        bookmarks_only: page.bookmarks_only,
    };

    let service = FeedService::new(state.service_context());
    let response = service.compose_feed_page(&query).await?;
    Ok(Json(response))
}

/// Get a post with a page of all its replies
///
/// GET /channels/{channel_id}/posts/{post_id}/replies
pub async fn list_replies(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(path): Path<ChannelPostPath>,
    page: PageRequest,
) -> ApiResult<Json<RepliesPageResponse>> {
    let query = RepliesQuery {
        post_id: path.post_id()?,
        channel_id: path.channel_id()?,
        viewer_id: viewer.user_id,
        page: page.page,
        page_size: page.limit,
        sort_mode: page.sort_mode,
    };

    let service = FeedService::new(state.service_context());
    let response = service.list_replies(&query).await?;
    Ok(Json(response))
}

/// Whether the viewer has unseen replies in the channel
///
/// GET /channels/{channel_id}/read-status
pub async fn read_status(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(path): Path<ChannelPath>,
) -> ApiResult<Json<ApiResponse<UnreadStatusResponse>>> {
    let channel_id = path.channel_id()?;

    let service = FeedService::new(state.service_context());
    let status = service.read_status(&channel_id, &viewer.user_id).await;
    Ok(Json(ApiResponse::new(status)))
}
