//! PostgreSQL implementation of UserActionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use feed_core::entities::{ActionKind, UserAction};
use feed_core::traits::{RepoResult, ToggleOutcome, UserActionRepository};
use feed_core::value_objects::{PostId, UserId};

use crate::mappers::action_kind_to_str;
use crate::models::UserActionModel;

use super::error::{map_db_error, map_post_fk_violation, post_not_found};

/// Counter column on posts that mirrors an action
fn counter_column(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Like => "like_count",
        ActionKind::Bookmark => "bookmark_count",
    }
}

/// PostgreSQL implementation of UserActionRepository
#[derive(Clone)]
pub struct PgUserActionRepository {
    pool: PgPool,
}

impl PgUserActionRepository {
    /// Create a new PgUserActionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserActionRepository for PgUserActionRepository {
    #[instrument(skip(self))]
    async fn find_values(
        &self,
        post_ids: &[PostId],
        user_id: &UserId,
    ) -> RepoResult<Vec<UserAction>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = post_ids.iter().map(|id| id.into_inner()).collect();
        let results = sqlx::query_as::<_, UserActionModel>(
            r#"
            SELECT post_id, user_id, action, value, created_at, updated_at
            FROM user_actions
            WHERE user_id = $1 AND post_id = ANY($2)
            "#,
        )
        .bind(user_id.as_str())
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .filter_map(|model| match UserAction::try_from(model) {
                Ok(action) => Some(action),
                Err(e) => {
                    warn!(error = %e, "Skipping unrecognised user action row");
                    None
                }
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: &UserId,
        kind: ActionKind,
    ) -> RepoResult<ToggleOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the post row so concurrent toggles on it serialize
        let locked: Option<i64> = sqlx::query_scalar("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(post_id.into_inner())
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if locked.is_none() {
            return Err(post_not_found(post_id));
        }

        let current: Option<bool> = sqlx::query_scalar(
            r#"
            SELECT value FROM user_actions
            WHERE post_id = $1 AND user_id = $2 AND action = $3
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.as_str())
        .bind(action_kind_to_str(kind))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let value = !current.unwrap_or(false);
        let delta: i64 = if value { 1 } else { -1 };

        let column = counter_column(kind);
        let count: i64 = sqlx::query_scalar(&format!(
            "UPDATE posts SET {column} = GREATEST({column} + $2, 0) WHERE id = $1 RETURNING {column}"
        ))
        .bind(post_id.into_inner())
        .bind(delta)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO user_actions (post_id, user_id, action, value)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (post_id, user_id, action)
            DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(post_id.into_inner())
        .bind(user_id.as_str())
        .bind(action_kind_to_str(kind))
        .bind(value)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_post_fk_violation(e, post_id))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(ToggleOutcome { value, count })
    }
}
