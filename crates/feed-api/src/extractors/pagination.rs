//! Page request extractor
//!
//! Extracts page/limit/sort parameters from query strings. Missing values
//! fall back to the configured defaults; malformed values are rejected.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use feed_core::SortMode;
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::AppState;

/// Raw paging query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub bookmarks_only: Option<bool>,
}

/// Validated paging parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: i64,
    /// Page size, between 1 and the configured maximum
    pub limit: i64,
    pub sort_mode: SortMode,
    pub bookmarks_only: bool,
}

impl PageRequest {
    /// Validate raw parameters against the configured page sizes
    pub fn from_params(
        params: PageParams,
        default_limit: i64,
        max_limit: i64,
    ) -> Result<Self, ApiError> {
        let page = params.page.unwrap_or(1);
        if page < 1 {
            return Err(ApiError::invalid_query("page must be at least 1"));
        }

        let limit = params.limit.unwrap_or(default_limit);
        if !(1..=max_limit).contains(&limit) {
            return Err(ApiError::invalid_query(format!(
                "limit must be between 1 and {max_limit}"
            )));
        }

        let sort_mode = match params.sort_by.as_deref() {
            None | Some("") => SortMode::default(),
            Some(raw) => raw
                .parse::<SortMode>()
                .map_err(|e| ApiError::invalid_query(e.to_string()))?,
        };

        Ok(Self {
            page,
            limit,
            sort_mode,
            bookmarks_only: params.bookmarks_only.unwrap_or(false),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageRequest
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let app_state = AppState::from_ref(state);
        let feed = &app_state.config().feed;
        PageRequest::from_params(params, feed.default_page_size, feed.max_page_size)
    }
}
