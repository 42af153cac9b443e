//! Post entity <-> model mapper

use feed_core::entities::{NewPost, Post, PostKind, PostStatus};
use feed_core::value_objects::{ChannelId, PostId, UserId};

use crate::models::PostModel;

/// Convert database type string to PostKind; anything but a reply is a comment
fn parse_post_kind(type_str: &str) -> PostKind {
    if type_str.eq_ignore_ascii_case("reply") {
        PostKind::Reply
    } else {
        PostKind::Comment
    }
}

fn parse_post_status(status: &str) -> PostStatus {
    if status.eq_ignore_ascii_case("deleted") {
        PostStatus::Deleted
    } else {
        PostStatus::Published
    }
}

/// Convert PostKind enum to database string
pub fn post_kind_to_str(kind: PostKind) -> &'static str {
    kind.as_str()
}

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::new(model.id),
            channel_id: ChannelId::new(model.channel_id),
            author_id: UserId::new(model.user_id),
            content: model.content,
            kind: parse_post_kind(&model.post_type),
            parent_id: (model.parent_id != 0).then(|| PostId::new(model.parent_id)),
            is_pinned: model.is_pinned,
            like_count: model.like_count,
            bookmark_count: model.bookmark_count,
            status: parse_post_status(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

/// Convert NewPost reference to values for database insertion
pub struct PostInsert<'a> {
    pub channel_id: &'a str,
    pub user_id: &'a str,
    pub content: &'a str,
    pub post_type: &'static str,
    pub parent_id: i64,
}

impl<'a> PostInsert<'a> {
    pub fn new(post: &'a NewPost) -> Self {
        Self {
            channel_id: post.channel_id.as_str(),
            user_id: post.author_id.as_str(),
            content: &post.content,
            post_type: post_kind_to_str(post.kind),
            parent_id: post.parent_id.map_or(0, PostId::into_inner),
        }
    }
}
