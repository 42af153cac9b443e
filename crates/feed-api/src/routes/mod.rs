//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{feed, health, posts, users};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(channel_routes())
        .merge(post_routes())
        .merge(user_routes())
}

/// Channel-scoped feed routes
fn channel_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/channels/:channel_id/posts",
            get(feed::get_feed).post(posts::create_post),
        )
        .route(
            "/channels/:channel_id/posts/:post_id/replies",
            get(feed::list_replies),
        )
        .route(
            "/channels/:channel_id/posts/:post_id/actions/:action",
            post(posts::toggle_action),
        )
        .route("/channels/:channel_id/read-status", get(feed::read_status))
}

/// Routes addressing a post directly
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:post_id", delete(posts::delete_post))
        .route("/posts/:post_id/reports", post(posts::report_post))
}

/// Routes acting on the caller's own account
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me/profile", put(users::upsert_profile))
}
