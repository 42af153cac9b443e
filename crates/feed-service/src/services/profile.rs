//! Profile service
//!
//! Keeps the author display fields that feed pages join onto posts.

use feed_core::{UserId, UserProfile};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{ProfileResponse, UpsertProfileRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create the user's profile, or replace all of its fields
    #[instrument(skip(self, request))]
    pub async fn upsert_profile(
        &self,
        user_id: &UserId,
        request: UpsertProfileRequest,
    ) -> ServiceResult<ProfileResponse> {
        request.validate()?;

        let profile = UserProfile {
            user_id: user_id.clone(),
            first_name: request.first_name.trim().to_owned(),
            middle_name: request.middle_name.trim().to_owned(),
            last_name: request.last_name.trim().to_owned(),
            phone: request.phone.trim().to_owned(),
            avatar_url: request.avatar_url.trim().to_owned(),
        };

        let stored = self.ctx.profile_repo().upsert(&profile).await?;

        info!(user_id = %user_id, "Profile upserted");
        Ok(ProfileResponse::from(stored))
    }
}
