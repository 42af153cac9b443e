//! User profile handlers

use axum::{extract::State, Json};
use feed_service::{ApiResponse, ProfileResponse, ProfileService, UpsertProfileRequest};

use crate::extractors::{ValidatedJson, Viewer};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create or replace the caller's author profile
///
/// PUT /users/@me/profile
pub async fn upsert_profile(
    State(state): State<AppState>,
    viewer: Viewer,
    ValidatedJson(request): ValidatedJson<UpsertProfileRequest>,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.upsert_profile(&viewer.user_id, request).await?;
    Ok(Json(ApiResponse::new(profile)))
}
