//! Post service
//!
//! Write side of the feed: creating posts and replies, toggling likes and
//! bookmarks, soft deletion and moderation reports.

use chrono::Utc;
use feed_core::{
    ActionKind, ChannelId, DomainError, NewPost, NewReport, Post, PostId, PostKind, UserId,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    AuthorFields, CreatePostRequest, CreatedPostResponse, ReportPostRequest, ReportResponse,
    ToggleActionResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::unread::UnreadFlagTracker;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a top-level post, or a reply when `parent_id` is set.
    ///
    /// A reply to someone else's post raises the unread flag for the parent's
    /// author in this channel.
    #[instrument(skip(self, request), fields(parent_id = ?request.parent_id))]
    pub async fn create_post(
        &self,
        channel_id: &ChannelId,
        author_id: &UserId,
        request: CreatePostRequest,
    ) -> ServiceResult<CreatedPostResponse> {
        request.validate()?;

        let requested_kind = request
            .kind
            .as_deref()
            .map(str::parse::<PostKind>)
            .transpose()?;

        let parent = match request.parent() {
            Some(raw_id) => Some(self.load_parent(channel_id, PostId::new(raw_id)).await?),
            None => None,
        };

        let new_post = match &parent {
            Some(parent) => {
                if requested_kind == Some(PostKind::Comment) {
                    return Err(ServiceError::validation(
                        "kind COMMENT cannot have a parent_id",
                    ));
                }
                NewPost::reply(
                    channel_id.clone(),
                    author_id.clone(),
                    request.trimmed_content().to_owned(),
                    parent.id,
                )
            }
            None => {
                if requested_kind == Some(PostKind::Reply) {
                    return Err(ServiceError::validation("kind REPLY requires a parent_id"));
                }
                NewPost::comment(
                    channel_id.clone(),
                    author_id.clone(),
                    request.trimmed_content().to_owned(),
                )
            }
        };

        let post = self.ctx.post_repo().create(&new_post).await?;

        info!(
            post_id = %post.id,
            channel_id = %channel_id,
            author_id = %author_id,
            kind = %post.kind,
            "Post created"
        );

        if let Some(parent) = &parent {
            if !parent.is_authored_by(author_id) {
                UnreadFlagTracker::new(self.ctx)
                    .mark(&parent.author_id, channel_id)
                    .await;
            }
        }

        let author = match self
            .ctx
            .profile_repo()
            .find_by_ids(std::slice::from_ref(author_id))
            .await
        {
            Ok(profiles) => AuthorFields::from(profiles.first()),
            Err(e) => {
                warn!(author_id = %author_id, error = %e, "Author profile lookup failed");
                AuthorFields::default()
            }
        };

        Ok(CreatedPostResponse::new(post, author))
    }

    /// Flip the viewer's like or bookmark on a post.
    ///
    /// When `channel_id` is given the post must belong to it.
    #[instrument(skip(self))]
    pub async fn toggle_action(
        &self,
        channel_id: Option<&ChannelId>,
        post_id: PostId,
        viewer_id: &UserId,
        kind: ActionKind,
    ) -> ServiceResult<ToggleActionResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .filter(|post| channel_id.map_or(true, |channel| &post.channel_id == channel))
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        post.ensure_actionable(kind)?;

        let outcome = self
            .ctx
            .action_repo()
            .toggle(post.id, viewer_id, kind)
            .await?;

        info!(
            post_id = %post.id,
            viewer_id = %viewer_id,
            action = %kind,
            value = outcome.value,
            count = outcome.count,
            "Action toggled"
        );

        Ok(ToggleActionResponse::new(&post, kind, outcome))
    }

    /// Soft delete a post owned by the requester
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: PostId, requester_id: &UserId) -> ServiceResult<()> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        if !post.is_authored_by(requester_id) {
            return Err(DomainError::NotPostAuthor.into());
        }

        if post.is_deleted() {
            info!(post_id = %post_id, "Post already deleted");
            return Ok(());
        }

        self.ctx.post_repo().soft_delete(post_id, Utc::now()).await?;

        info!(post_id = %post_id, requester_id = %requester_id, "Post deleted");
        Ok(())
    }

    /// File a moderation report against an existing post
    #[instrument(skip(self))]
    pub async fn report_post(
        &self,
        post_id: PostId,
        reporter_id: &UserId,
        request: ReportPostRequest,
    ) -> ServiceResult<ReportResponse> {
        request.validate()?;

        if self.ctx.post_repo().find_by_id(post_id).await?.is_none() {
            return Err(ServiceError::not_found("Post", post_id.to_string()));
        }

        let report = self
            .ctx
            .report_repo()
            .create(&NewReport {
                post_id,
                reported_by: reporter_id.clone(),
                master_report_id: request.master_report_id,
            })
            .await?;

        info!(
            report_id = report.id,
            post_id = %post_id,
            reporter_id = %reporter_id,
            "Post reported"
        );

        Ok(ReportResponse::from(report))
    }

    /// A reply target must exist, be top-level and live in the same channel
    async fn load_parent(&self, channel_id: &ChannelId, parent_id: PostId) -> ServiceResult<Post> {
        let parent = self
            .ctx
            .post_repo()
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", parent_id.to_string()))?;

        if &parent.channel_id != channel_id {
            return Err(DomainError::InvalidParent(format!(
                "post {parent_id} belongs to another channel"
            ))
            .into());
        }
        if parent.is_reply() {
            return Err(DomainError::InvalidParent(format!(
                "post {parent_id} is a reply; replies cannot be nested"
            ))
            .into());
        }

        Ok(parent)
    }
}
