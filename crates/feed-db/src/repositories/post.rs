//! PostgreSQL implementation of PostRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{NewPost, Post, DELETED_POST_CONTENT};
use feed_core::traits::{AuthorScope, PostQuery, PostRepository, RepoResult};
use feed_core::value_objects::{ChannelId, PostId, ReplyRanking, UserId};

use crate::mappers::PostInsert;
use crate::models::{PostModel, ReplyCountModel};

use super::error::{map_db_error, post_not_found};
use super::ordering::{post_order_clause, reply_order_clause};

const POST_COLUMNS: &str = "p.id, p.channel_id, p.user_id, p.content, p.type AS post_type, \
     p.parent_id, p.like_count, p.bookmark_count, p.is_pinned, p.status, \
     p.created_at, p.updated_at, p.deleted_at";

/// Top-level posts of a channel, optionally restricted to or excluding one author
const TOP_LEVEL_FILTER: &str = "p.channel_id = $1 AND p.type = 'COMMENT' \
     AND ($2::TEXT IS NULL OR p.user_id = $2) \
     AND ($3::TEXT IS NULL OR p.user_id <> $3)";

/// Split an AuthorScope into the (only, excluding) bind pair used by TOP_LEVEL_FILTER
fn author_binds(scope: &AuthorScope) -> (Option<&str>, Option<&str>) {
    match scope {
        AuthorScope::Any => (None, None),
        AuthorScope::Only(user_id) => (Some(user_id.as_str()), None),
        AuthorScope::Excluding(user_id) => (None, Some(user_id.as_str())),
    }
}

fn raw_ids(ids: &[PostId]) -> Vec<i64> {
    ids.iter().map(|id| id.into_inner()).collect()
}

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts p WHERE p.id = $1");
        let result = sqlx::query_as::<_, PostModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, query: &PostQuery) -> RepoResult<Vec<Post>> {
        let (only, excluding) = author_binds(&query.author);
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE {TOP_LEVEL_FILTER} \
             ORDER BY {} LIMIT $4 OFFSET $5",
            post_order_clause(query.ordering)
        );

        let results = sqlx::query_as::<_, PostModel>(&sql)
            .bind(query.channel_id.as_str())
            .bind(only)
            .bind(excluding)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, channel_id: &ChannelId, author: &AuthorScope) -> RepoResult<i64> {
        let (only, excluding) = author_binds(author);
        let sql = format!("SELECT COUNT(*) FROM posts p WHERE {TOP_LEVEL_FILTER}");

        sqlx::query_scalar::<_, i64>(&sql)
            .bind(channel_id.as_str())
            .bind(only)
            .bind(excluding)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_bookmarked_page(
        &self,
        channel_id: &ChannelId,
        user_id: &UserId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p \
             JOIN user_actions ua ON ua.post_id = p.id \
             WHERE p.channel_id = $1 AND p.type = 'COMMENT' \
               AND ua.user_id = $2 AND ua.action = 'bookmark' AND ua.value = TRUE \
             ORDER BY ua.updated_at DESC, p.id DESC \
             LIMIT $3 OFFSET $4"
        );

        let results = sqlx::query_as::<_, PostModel>(&sql)
            .bind(channel_id.as_str())
            .bind(user_id.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_bookmarked(&self, channel_id: &ChannelId, user_id: &UserId) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM posts p
            JOIN user_actions ua ON ua.post_id = p.id
            WHERE p.channel_id = $1 AND p.type = 'COMMENT'
              AND ua.user_id = $2 AND ua.action = 'bookmark' AND ua.value = TRUE
            "#,
        )
        .bind(channel_id.as_str())
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_reply_candidates(
        &self,
        parent_ids: &[PostId],
        ranking: ReplyRanking,
        per_parent: usize,
    ) -> RepoResult<Vec<Post>> {
        if parent_ids.is_empty() || per_parent == 0 {
            return Ok(Vec::new());
        }

        // Windowed rank bounds the rows fetched; the caller still re-ranks per parent
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM ( \
                 SELECT p.*, ROW_NUMBER() OVER (PARTITION BY p.parent_id ORDER BY {}) AS reply_rank \
                 FROM posts p \
                 WHERE p.parent_id = ANY($1) \
             ) p \
             WHERE p.reply_rank <= $2",
            reply_order_clause(ranking)
        );

        let results = sqlx::query_as::<_, PostModel>(&sql)
            .bind(raw_ids(parent_ids))
            .bind(per_parent as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_replies_page(
        &self,
        parent_id: PostId,
        ranking: ReplyRanking,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<Post>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts p WHERE p.parent_id = $1 \
             ORDER BY {} LIMIT $2 OFFSET $3",
            reply_order_clause(ranking)
        );

        let results = sqlx::query_as::<_, PostModel>(&sql)
            .bind(parent_id.into_inner())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_replies(&self, parent_ids: &[PostId]) -> RepoResult<HashMap<PostId, i64>> {
        if parent_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let results = sqlx::query_as::<_, ReplyCountModel>(
            r#"
            SELECT parent_id, COUNT(*) AS reply_count
            FROM posts
            WHERE parent_id = ANY($1)
            GROUP BY parent_id
            "#,
        )
        .bind(raw_ids(parent_ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| (PostId::new(row.parent_id), row.reply_count))
            .collect())
    }

    #[instrument(skip(self, post), fields(channel_id = %post.channel_id, kind = %post.kind))]
    async fn create(&self, post: &NewPost) -> RepoResult<Post> {
        let insert = PostInsert::new(post);
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            INSERT INTO posts (channel_id, user_id, content, type, parent_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, channel_id, user_id, content, type AS post_type, parent_id,
                      like_count, bookmark_count, is_pinned, status,
                      created_at, updated_at, deleted_at
            "#,
        )
        .bind(insert.channel_id)
        .bind(insert.user_id)
        .bind(insert.content)
        .bind(insert.post_type)
        .bind(insert.parent_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(result))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: PostId, deleted_at: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET content = $2, status = 'DELETED', deleted_at = $3, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(DELETED_POST_CONTENT)
        .bind(deleted_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
