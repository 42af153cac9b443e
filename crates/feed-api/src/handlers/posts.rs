//! Post write handlers
//!
//! Endpoints for creating, liking, bookmarking, deleting and reporting posts.

use axum::{
    extract::{Path, State},
    Json,
};
use feed_service::{
    ApiResponse, CreatePostRequest, CreatedPostResponse, PostService, ReportPostRequest,
    ReportResponse, ToggleActionResponse,
};

use crate::extractors::{ChannelPath, PostActionPath, PostPath, ValidatedJson, Viewer};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a post or a reply
///
/// POST /channels/{channel_id}/posts
pub async fn create_post(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(path): Path<ChannelPath>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<ApiResponse<CreatedPostResponse>>>> {
    let channel_id = path.channel_id()?;

    let service = PostService::new(state.service_context());
    let post = service
        .create_post(&channel_id, &viewer.user_id, request)
        .await?;
    Ok(Created(Json(ApiResponse::new(post))))
}

/// Toggle a like or bookmark
///
/// POST /channels/{channel_id}/posts/{post_id}/actions/{action}
pub async fn toggle_action(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(path): Path<PostActionPath>,
) -> ApiResult<Json<ApiResponse<ToggleActionResponse>>> {
    let channel_id = path.channel_id()?;
    let post_id = path.post_id()?;
    let action = path.action()?;

    let service = PostService::new(state.service_context());
    let outcome = service
        .toggle_action(Some(&channel_id), post_id, &viewer.user_id, action)
        .await?;
    Ok(Json(ApiResponse::new(outcome)))
}

/// Soft delete own post
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(path): Path<PostPath>,
) -> ApiResult<NoContent> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    service.delete_post(post_id, &viewer.user_id).await?;
    Ok(NoContent)
}

/// Report a post to moderation
///
/// POST /posts/{post_id}/reports
pub async fn report_post(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(path): Path<PostPath>,
    ValidatedJson(request): ValidatedJson<ReportPostRequest>,
) -> ApiResult<Created<Json<ApiResponse<ReportResponse>>>> {
    let post_id = path.post_id()?;

    let service = PostService::new(state.service_context());
    let report = service
        .report_post(post_id, &viewer.user_id, request)
        .await?;
    Ok(Created(Json(ApiResponse::new(report))))
}
