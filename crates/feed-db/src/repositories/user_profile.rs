//! PostgreSQL implementation of UserProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::UserProfile;
use feed_core::traits::{RepoResult, UserProfileRepository};
use feed_core::value_objects::UserId;

use crate::models::UserDetailsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of UserProfileRepository
#[derive(Clone)]
pub struct PgUserProfileRepository {
    pool: PgPool,
}

impl PgUserProfileRepository {
    /// Create a new PgUserProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for PgUserProfileRepository {
    #[instrument(skip(self), fields(count = user_ids.len()))]
    async fn find_by_ids(&self, user_ids: &[UserId]) -> RepoResult<Vec<UserProfile>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = user_ids.iter().map(|id| id.as_str().to_owned()).collect();
        let results = sqlx::query_as::<_, UserDetailsModel>(
            r#"
            SELECT user_id, first_name, middle_name, last_name, user_phone, profile_image_url
            FROM user_details
            WHERE user_id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserProfile::from).collect())
    }

    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn upsert(&self, profile: &UserProfile) -> RepoResult<UserProfile> {
        let result = sqlx::query_as::<_, UserDetailsModel>(
            r#"
            INSERT INTO user_details
                (user_id, first_name, middle_name, last_name, user_phone, profile_image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                middle_name = EXCLUDED.middle_name,
                last_name = EXCLUDED.last_name,
                user_phone = EXCLUDED.user_phone,
                profile_image_url = EXCLUDED.profile_image_url,
                updated_at = NOW()
            RETURNING user_id, first_name, middle_name, last_name, user_phone, profile_image_url
            "#,
        )
        .bind(profile.user_id.as_str())
        .bind(&profile.first_name)
        .bind(&profile.middle_name)
        .bind(&profile.last_name)
        .bind(&profile.phone)
        .bind(&profile.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(UserProfile::from(result))
    }
}
