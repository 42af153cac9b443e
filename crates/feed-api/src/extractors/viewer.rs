//! Viewer extractor
//!
//! Identity is resolved upstream; this service trusts the `x-user-id` header
//! and only rejects a missing or blank value.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, HeaderName, HeaderValue},
};
use axum_extra::{headers, TypedHeader};
use feed_core::UserId;

use crate::response::ApiError;

static X_USER_ID: HeaderName = HeaderName::from_static("x-user-id");

/// Typed `x-user-id` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XUserId(pub UserId);

impl headers::Header for XUserId {
    fn name() -> &'static HeaderName {
        &X_USER_ID
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let raw = value.to_str().map_err(|_| headers::Error::invalid())?;
        UserId::parse(raw)
            .map(XUserId)
            .map_err(|_| headers::Error::invalid())
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(self.0.as_str()) {
            values.extend(std::iter::once(value));
        }
    }
}

/// The user on whose behalf the request is made
#[derive(Debug, Clone)]
pub struct Viewer {
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(XUserId(user_id)) =
            TypedHeader::<XUserId>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingUser)?;

        Ok(Viewer { user_id })
    }
}
