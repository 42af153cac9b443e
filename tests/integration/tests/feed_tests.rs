//! Feed composition tests against the in-memory store
//!
//! Run with: cargo test -p integration-tests --test feed_tests

use std::collections::HashSet;
use std::sync::atomic::Ordering;
use std::time::Duration;

use feed_core::{ActionKind, PostId, SortMode, DELETED_POST_CONTENT};
use feed_service::{
    CreatePostRequest, FeedPageQuery, FeedPageResponse, FeedService, PostService, ProfileService,
    RepliesQuery, ReportPostRequest, ServiceResult, UpsertProfileRequest,
};
use integration_tests::{channel, ids, profile, user, FeedFixture};

async fn load_feed(
    fx: &FeedFixture,
    viewer: &str,
    page: i64,
    page_size: i64,
    sort_mode: SortMode,
    bookmarks_only: bool,
) -> ServiceResult<FeedPageResponse> {
    FeedService::new(&fx.ctx)
        .compose_feed_page(&FeedPageQuery {
            channel_id: channel(),
            viewer_id: user(viewer),
            page,
            page_size,
            sort_mode,
            bookmarks_only,
        })
        .await
}

async fn user_feed(fx: &FeedFixture, viewer: &str, page: i64, page_size: i64) -> FeedPageResponse {
    load_feed(fx, viewer, page, page_size, SortMode::UserBased, false)
        .await
        .unwrap()
}

fn page_ids(page: &FeedPageResponse) -> Vec<i64> {
    page.data.iter().map(|p| p.id).collect()
}

fn reply_request(parent: PostId, content: &str) -> CreatePostRequest {
    CreatePostRequest {
        content: content.to_string(),
        parent_id: Some(parent.into_inner()),
        kind: None,
    }
}

async fn is_unread(fx: &FeedFixture, viewer: &str) -> bool {
    FeedService::new(&fx.ctx)
        .read_status(&channel(), &user(viewer))
        .await
        .is_unread
}

// ============================================================================
// Paging
// ============================================================================

#[tokio::test]
async fn test_pages_tile_own_then_community_without_gaps() {
    let fx = FeedFixture::new();
    let own = fx.posts("alice", 7).await;
    fx.posts("bob", 8).await;
    fx.posts("carol", 8).await;

    let mut seen = Vec::new();
    for page in 1..=5 {
        let response = user_feed(&fx, "alice", page, 5).await;
        assert_eq!(response.pagination.total_record_count, 23);
        assert_eq!(response.pagination.total_pages, 5);
        seen.extend(page_ids(&response));
    }

    let unique: HashSet<i64> = seen.iter().copied().collect();
    assert_eq!(seen.len(), 23);
    assert_eq!(unique.len(), 23);

    // Own posts lead, newest first
    let mut expected_own = ids(&own);
    expected_own.reverse();
    assert_eq!(&seen[..7], expected_own.as_slice());
}

#[tokio::test]
async fn test_boundary_page_mixes_sources() {
    let fx = FeedFixture::new();
    let own = fx.posts("alice", 7).await;
    fx.posts("bob", 10).await;

    let page = user_feed(&fx, "alice", 2, 5).await;
    let authors: Vec<&str> = page.data.iter().map(|p| p.user_id.as_str()).collect();
    assert_eq!(authors, vec!["alice", "alice", "bob", "bob", "bob"]);
    assert_eq!(page.data[0].id, own[1].id.into_inner());
    assert_eq!(page.data[1].id, own[0].id.into_inner());
}

#[tokio::test]
async fn test_last_page_and_past_the_end() {
    let fx = FeedFixture::new();
    fx.posts("bob", 23).await;

    let last = user_feed(&fx, "alice", 3, 10).await;
    assert_eq!(last.data.len(), 3);
    assert_eq!(last.pagination.current_page, 3);
    assert_eq!(last.pagination.total_pages, 3);
    assert_eq!(last.pagination.single_page_record_count, 3);
    assert_eq!(last.pagination.total_record_count, 23);

    let beyond = user_feed(&fx, "alice", 4, 10).await;
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.pagination.single_page_record_count, 0);
    assert_eq!(beyond.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_empty_channel() {
    let fx = FeedFixture::new();
    let page = user_feed(&fx, "alice", 1, 10).await;
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total_pages, 0);
    assert_eq!(page.pagination.total_record_count, 0);
}

#[tokio::test]
async fn test_invalid_window_is_rejected() {
    let fx = FeedFixture::new();
    let err = load_feed(&fx, "alice", 0, 10, SortMode::UserBased, false)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    let err = load_feed(&fx, "alice", 1, 101, SortMode::UserBased, false)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_community_ranked_by_likes_in_user_mode() {
    let fx = FeedFixture::new();
    let quiet = fx.post("bob", "quiet").await;
    let popular = fx.post("carol", "popular").await;
    fx.store.update(quiet.id, |p| p.like_count = 1).await;
    fx.store.update(popular.id, |p| p.like_count = 9).await;
    let fresh = fx.post("dave", "fresh").await;

    let page = user_feed(&fx, "alice", 1, 10).await;
    assert_eq!(
        page_ids(&page),
        vec![
            popular.id.into_inner(),
            quiet.id.into_inner(),
            fresh.id.into_inner()
        ]
    );
}

#[tokio::test]
async fn test_ideas_mode_pins_first_and_ignores_authorship() {
    let fx = FeedFixture::new();
    let pinned = fx.post("bob", "pinned").await;
    fx.store.update(pinned.id, |p| p.is_pinned = true).await;
    let mine = fx.post("alice", "mine").await;
    let newest = fx.post("carol", "newest").await;

    let page = load_feed(&fx, "alice", 1, 10, SortMode::IdeasBased, false)
        .await
        .unwrap();
    assert_eq!(
        page_ids(&page),
        vec![
            pinned.id.into_inner(),
            newest.id.into_inner(),
            mine.id.into_inner()
        ]
    );
    assert!(page.data[0].is_pinned);
}

#[tokio::test]
async fn test_deleted_post_sorts_last_but_is_counted() {
    let fx = FeedFixture::new();
    let own = fx.posts("alice", 3).await;
    PostService::new(&fx.ctx)
        .delete_post(own[2].id, &user("alice"))
        .await
        .unwrap();

    let page = user_feed(&fx, "alice", 1, 10).await;
    assert_eq!(
        page_ids(&page),
        vec![
            own[1].id.into_inner(),
            own[0].id.into_inner(),
            own[2].id.into_inner()
        ]
    );
    assert_eq!(page.pagination.total_record_count, 3);
    assert_eq!(page.data[2].content, DELETED_POST_CONTENT);
    assert_eq!(page.data[2].status, "DELETED");
}

// ============================================================================
// Reply previews
// ============================================================================

#[tokio::test]
async fn test_preview_picks_newest_three_and_shows_oldest_first() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    let mut replies = Vec::new();
    for i in 0..5 {
        replies.push(fx.reply(parent.id, "bob", &format!("answer {i}")).await);
    }

    let page = user_feed(&fx, "carol", 1, 10).await;
    let item = &page.data[0];
    let preview: Vec<i64> = item.replies.iter().map(|r| r.id).collect();

    assert_eq!(
        preview,
        vec![
            replies[2].id.into_inner(),
            replies[3].id.into_inner(),
            replies[4].id.into_inner()
        ]
    );
    assert_eq!(item.replies_count, 5);
}

#[tokio::test]
async fn test_preview_prefers_pinned_reply_in_ideas_mode() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    let mut replies = Vec::new();
    for i in 0..5 {
        replies.push(fx.reply(parent.id, "bob", &format!("answer {i}")).await);
    }
    fx.store.update(replies[0].id, |p| p.is_pinned = true).await;

    let ideas = load_feed(&fx, "carol", 1, 10, SortMode::IdeasBased, false)
        .await
        .unwrap();
    let preview: Vec<i64> = ideas.data[0].replies.iter().map(|r| r.id).collect();
    assert_eq!(
        preview,
        vec![
            replies[0].id.into_inner(),
            replies[3].id.into_inner(),
            replies[4].id.into_inner()
        ]
    );

    // Pinning carries no weight in user-based mode
    let user_mode = user_feed(&fx, "carol", 1, 10).await;
    let preview: Vec<i64> = user_mode.data[0].replies.iter().map(|r| r.id).collect();
    assert!(!preview.contains(&replies[0].id.into_inner()));
}

#[tokio::test]
async fn test_deleted_reply_is_previewed_last() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    let first = fx.reply(parent.id, "bob", "first").await;
    let second = fx.reply(parent.id, "bob", "second").await;
    PostService::new(&fx.ctx)
        .delete_post(second.id, &user("bob"))
        .await
        .unwrap();

    let page = user_feed(&fx, "carol", 1, 10).await;
    let preview: Vec<i64> = page.data[0].replies.iter().map(|r| r.id).collect();
    assert_eq!(preview, vec![first.id.into_inner(), second.id.into_inner()]);
}

// ============================================================================
// Bookmarks view
// ============================================================================

#[tokio::test]
async fn test_bookmarks_view_lists_latest_bookmark_first_without_previews() {
    let fx = FeedFixture::new();
    let first = fx.post("bob", "first").await;
    let second = fx.post("bob", "second").await;
    fx.post("carol", "own post").await;
    fx.reply(first.id, "dave", "reply").await;

    let posts = PostService::new(&fx.ctx);
    posts
        .toggle_action(None, first.id, &user("carol"), ActionKind::Bookmark)
        .await
        .unwrap();
    posts
        .toggle_action(None, second.id, &user("carol"), ActionKind::Bookmark)
        .await
        .unwrap();

    let page = load_feed(&fx, "carol", 1, 10, SortMode::UserBased, true)
        .await
        .unwrap();
    assert_eq!(
        page_ids(&page),
        vec![second.id.into_inner(), first.id.into_inner()]
    );
    assert_eq!(page.pagination.total_record_count, 2);
    assert!(page.data.iter().all(|p| p.replies.is_empty() && p.is_bookmarked));
    assert_eq!(page.data[1].replies_count, 1);

    let ideas = load_feed(&fx, "carol", 1, 10, SortMode::IdeasBased, true)
        .await
        .unwrap();
    assert!(ideas.data.is_empty());
    assert_eq!(ideas.pagination.total_record_count, 0);
}

// ============================================================================
// Actions
// ============================================================================

#[tokio::test]
async fn test_like_toggle_round_trip() {
    let fx = FeedFixture::new();
    let post = fx.post("alice", "hello").await;
    let posts = PostService::new(&fx.ctx);

    let on = posts
        .toggle_action(Some(&channel()), post.id, &user("bob"), ActionKind::Like)
        .await
        .unwrap();
    assert!(on.value);
    assert_eq!(on.count, 1);

    let page = user_feed(&fx, "bob", 1, 10).await;
    assert!(page.data[0].is_liked);
    assert_eq!(page.data[0].like_count, 1);

    let off = posts
        .toggle_action(Some(&channel()), post.id, &user("bob"), ActionKind::Like)
        .await
        .unwrap();
    assert!(!off.value);
    assert_eq!(off.count, 0);

    let page = user_feed(&fx, "bob", 1, 10).await;
    assert!(!page.data[0].is_liked);
}

#[tokio::test]
async fn test_liked_reply_shows_in_preview() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    let reply = fx.reply(parent.id, "bob", "answer").await;
    PostService::new(&fx.ctx)
        .toggle_action(None, reply.id, &user("carol"), ActionKind::Like)
        .await
        .unwrap();

    let page = user_feed(&fx, "carol", 1, 10).await;
    assert!(page.data[0].replies[0].is_liked);
    assert!(!page.data[0].is_liked);
}

#[tokio::test]
async fn test_bookmarking_a_reply_is_denied() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    let reply = fx.reply(parent.id, "bob", "answer").await;

    let err = PostService::new(&fx.ctx)
        .toggle_action(None, reply.id, &user("alice"), ActionKind::Bookmark)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 403);
}

#[tokio::test]
async fn test_action_on_other_channel_post_is_not_found() {
    let fx = FeedFixture::new();
    let post = fx.post("alice", "hello").await;

    let err = PostService::new(&fx.ctx)
        .toggle_action(
            Some(&feed_core::ChannelId::new("elsewhere")),
            post.id,
            &user("bob"),
            ActionKind::Like,
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Unread flag
// ============================================================================

#[tokio::test]
async fn test_reply_sets_flag_until_author_loads_feed() {
    let fx = FeedFixture::new();
    let post = fx.post("alice", "question").await;

    PostService::new(&fx.ctx)
        .create_post(&channel(), &user("bob"), reply_request(post.id, "answer"))
        .await
        .unwrap();

    let key = "community_comment_unread:alice:general";
    assert_eq!(fx.flags.ttl(key).await, Some(Duration::from_secs(604_800)));
    assert!(is_unread(&fx, "alice").await);

    // Someone else's feed load leaves it alone
    user_feed(&fx, "bob", 1, 10).await;
    assert!(is_unread(&fx, "alice").await);

    // Reading the status does not consume it either
    assert!(is_unread(&fx, "alice").await);

    user_feed(&fx, "alice", 1, 10).await;
    assert!(!is_unread(&fx, "alice").await);
    assert!(!fx.flags.contains(key).await);
}

#[tokio::test]
async fn test_self_reply_sets_no_flag() {
    let fx = FeedFixture::new();
    let post = fx.post("alice", "question").await;

    PostService::new(&fx.ctx)
        .create_post(&channel(), &user("alice"), reply_request(post.id, "follow-up"))
        .await
        .unwrap();

    assert!(!is_unread(&fx, "alice").await);
}

// ============================================================================
// Degradation
// ============================================================================

#[tokio::test]
async fn test_action_lookup_failure_defaults_to_false() {
    let fx = FeedFixture::new();
    let post = fx.post("alice", "hello").await;
    PostService::new(&fx.ctx)
        .toggle_action(None, post.id, &user("bob"), ActionKind::Like)
        .await
        .unwrap();
    fx.store.failures.action_lookup.store(true, Ordering::SeqCst);

    let page = user_feed(&fx, "bob", 1, 10).await;
    assert!(!page.data[0].is_liked);
    assert!(!page.data[0].is_bookmarked);
    assert_eq!(page.data[0].like_count, 1);
}

#[tokio::test]
async fn test_reply_lookups_degrade_independently() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    for i in 0..4 {
        fx.reply(parent.id, "bob", &format!("answer {i}")).await;
    }

    fx.store.failures.reply_counts.store(true, Ordering::SeqCst);
    let page = user_feed(&fx, "carol", 1, 10).await;
    assert_eq!(page.data[0].replies.len(), 3);
    assert_eq!(page.data[0].replies_count, 3);

    fx.store.failures.reply_counts.store(false, Ordering::SeqCst);
    fx.store.failures.reply_candidates.store(true, Ordering::SeqCst);
    let page = user_feed(&fx, "carol", 1, 10).await;
    assert!(page.data[0].replies.is_empty());
    assert_eq!(page.data[0].replies_count, 4);
}

#[tokio::test]
async fn test_flag_store_outage_never_fails_requests() {
    let fx = FeedFixture::new();
    let post = fx.post("alice", "question").await;
    fx.flags.unavailable.store(true, Ordering::SeqCst);

    PostService::new(&fx.ctx)
        .create_post(&channel(), &user("bob"), reply_request(post.id, "answer"))
        .await
        .unwrap();
    user_feed(&fx, "alice", 1, 10).await;
    assert!(!is_unread(&fx, "alice").await);
}

#[tokio::test]
async fn test_profile_failure_fails_the_feed() {
    let fx = FeedFixture::new();
    fx.post("alice", "hello").await;
    fx.store.failures.profiles.store(true, Ordering::SeqCst);

    let err = load_feed(&fx, "bob", 1, 10, SortMode::UserBased, false)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_author_display_fields() {
    let fx = FeedFixture::new();
    fx.store.add_profile(profile("alice", "Ada", "Lovelace")).await;
    let parent = fx.post("alice", "hello").await;
    fx.reply(parent.id, "ghost", "no profile").await;

    let page = user_feed(&fx, "bob", 1, 10).await;
    let item = &page.data[0];
    assert_eq!(item.user_name, "Ada Lovelace");
    assert_eq!(item.avatar, "https://cdn.example.com/alice.png");
    assert_eq!(item.replies[0].user_name, "");
}

// ============================================================================
// All replies
// ============================================================================

#[tokio::test]
async fn test_list_replies_pages_in_ranking_order() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    let mut replies = Vec::new();
    for i in 0..5 {
        replies.push(fx.reply(parent.id, "bob", &format!("answer {i}")).await);
    }

    let response = FeedService::new(&fx.ctx)
        .list_replies(&RepliesQuery {
            post_id: parent.id,
            channel_id: channel(),
            viewer_id: user("carol"),
            page: 2,
            page_size: 2,
            sort_mode: SortMode::UserBased,
        })
        .await
        .unwrap();

    assert_eq!(response.data.id, parent.id.into_inner());
    assert_eq!(response.data.replies_count, 5);
    let page: Vec<i64> = response.data.replies.iter().map(|r| r.id).collect();
    assert_eq!(
        page,
        vec![replies[2].id.into_inner(), replies[1].id.into_inner()]
    );
    assert_eq!(response.pagination.total_pages, 3);
    assert_eq!(response.pagination.single_page_record_count, 2);
}

#[tokio::test]
async fn test_list_replies_total_falls_back_to_rows_seen() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    for i in 0..5 {
        fx.reply(parent.id, "bob", &format!("answer {i}")).await;
    }
    fx.store.failures.reply_counts.store(true, Ordering::SeqCst);

    let response = FeedService::new(&fx.ctx)
        .list_replies(&RepliesQuery {
            post_id: parent.id,
            channel_id: channel(),
            viewer_id: user("carol"),
            page: 2,
            page_size: 2,
            sort_mode: SortMode::UserBased,
        })
        .await
        .unwrap();

    assert_eq!(response.data.replies.len(), 2);
    assert_eq!(response.pagination.total_record_count, 4);
}

#[tokio::test]
async fn test_list_replies_requires_matching_channel() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;

    let err = FeedService::new(&fx.ctx)
        .list_replies(&RepliesQuery {
            post_id: parent.id,
            channel_id: feed_core::ChannelId::new("elsewhere"),
            viewer_id: user("carol"),
            page: 1,
            page_size: 10,
            sort_mode: SortMode::UserBased,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_create_post_and_reply() {
    let fx = FeedFixture::new();
    fx.store.add_profile(profile("alice", "Ada", "Lovelace")).await;
    let posts = PostService::new(&fx.ctx);

    let created = posts
        .create_post(
            &channel(),
            &user("alice"),
            CreatePostRequest {
                content: "hello".to_string(),
                parent_id: None,
                kind: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.comment_type, "COMMENT");
    assert_eq!(created.parent_id, 0);
    assert_eq!(created.user_name, "Ada Lovelace");

    let reply = posts
        .create_post(
            &channel(),
            &user("bob"),
            reply_request(PostId::new(created.post_id), "hi"),
        )
        .await
        .unwrap();
    assert_eq!(reply.comment_type, "REPLY");
    assert_eq!(reply.parent_id, created.post_id);
}

#[tokio::test]
async fn test_create_post_rejections() {
    let fx = FeedFixture::new();
    let parent = fx.post("alice", "question").await;
    let reply = fx.reply(parent.id, "bob", "answer").await;
    let posts = PostService::new(&fx.ctx);

    // Replies cannot be nested
    let err = posts
        .create_post(&channel(), &user("carol"), reply_request(reply.id, "nested"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    // Negative parent ids never reach the store
    let err = posts
        .create_post(&channel(), &user("carol"), reply_request(PostId::new(-5), "x"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    // Unknown parent
    let err = posts
        .create_post(&channel(), &user("carol"), reply_request(PostId::new(999), "x"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    // Blank body
    let err = posts
        .create_post(
            &channel(),
            &user("carol"),
            CreatePostRequest {
                content: "   ".to_string(),
                parent_id: None,
                kind: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);

    // Kind contradicts parent
    let err = posts
        .create_post(
            &channel(),
            &user("carol"),
            CreatePostRequest {
                content: "x".to_string(),
                parent_id: Some(parent.id.into_inner()),
                kind: Some("COMMENT".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_create_post_stores_trimmed_body() {
    let fx = FeedFixture::new();
    let padded = format!("  {}{}", "x".repeat(4990), " ".repeat(20));

    let created = PostService::new(&fx.ctx)
        .create_post(
            &channel(),
            &user("alice"),
            CreatePostRequest {
                content: padded,
                parent_id: None,
                kind: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.content.len(), 4990);
    let stored = fx.store.post(PostId::new(created.post_id)).await.unwrap();
    assert_eq!(stored.content, "x".repeat(4990));
}

#[tokio::test]
async fn test_delete_rules() {
    let fx = FeedFixture::new();
    let post = fx.post("alice", "hello").await;
    let posts = PostService::new(&fx.ctx);

    let err = posts.delete_post(post.id, &user("bob")).await.unwrap_err();
    assert_eq!(err.status_code(), 403);

    posts.delete_post(post.id, &user("alice")).await.unwrap();
    let stored = fx.store.post(post.id).await.unwrap();
    assert!(stored.is_deleted());
    let deleted_at = stored.deleted_at;

    // Second delete is a no-op
    posts.delete_post(post.id, &user("alice")).await.unwrap();
    assert_eq!(fx.store.post(post.id).await.unwrap().deleted_at, deleted_at);

    let err = posts
        .delete_post(PostId::new(999), &user("alice"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);

    // Deleted posts take no further actions
    let err = posts
        .toggle_action(None, post.id, &user("bob"), ActionKind::Like)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn test_report_post() {
    let fx = FeedFixture::new();
    let post = fx.post("alice", "spam").await;
    let posts = PostService::new(&fx.ctx);

    let report = posts
        .report_post(post.id, &user("bob"), ReportPostRequest { master_report_id: 2 })
        .await
        .unwrap();
    assert_eq!(report.post_id, post.id.into_inner());
    assert_eq!(report.reported_by, "bob");
    assert_eq!(fx.store.reports().await.len(), 1);

    let err = posts
        .report_post(
            PostId::new(999),
            &user("bob"),
            ReportPostRequest { master_report_id: 2 },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Profiles
// ============================================================================

#[tokio::test]
async fn test_profile_upsert_feeds_author_fields() {
    let fx = FeedFixture::new();
    fx.post("alice", "hello").await;
    let profiles = ProfileService::new(&fx.ctx);

    let created = profiles
        .upsert_profile(
            &user("alice"),
            UpsertProfileRequest {
                first_name: " Ada ".to_string(),
                last_name: "Byron".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.user_name, "Ada Byron");

    let page = user_feed(&fx, "bob", 1, 10).await;
    assert_eq!(page.data[0].user_name, "Ada Byron");

    profiles
        .upsert_profile(
            &user("alice"),
            UpsertProfileRequest {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                phone: "+44".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let page = user_feed(&fx, "bob", 1, 10).await;
    assert_eq!(page.data[0].user_name, "Ada Lovelace");
    assert_eq!(page.data[0].user_phone, "+44");
}

#[tokio::test]
async fn test_profile_upsert_rejects_oversized_fields() {
    let fx = FeedFixture::new();

    let err = ProfileService::new(&fx.ctx)
        .upsert_profile(
            &user("alice"),
            UpsertProfileRequest {
                phone: "9".repeat(40),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
}
