//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET is optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer, TestUser,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_blog(server: &TestServer, user: &TestUser, request: &CreateBlogRequest) -> BlogBody {
    let response = server
        .post_auth("/api/v1/blogs", &user.token, request)
        .await
        .unwrap();
    let created: BlogMutationBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.blog
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Identity Tests
// ============================================================================

#[tokio::test]
async fn test_me_provisions_account() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.new_user().unwrap();

    let response = server.get_auth("/api/v1/me", &user.token).await.unwrap();
    let me: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["id"], json!(user.id.to_string()));
    assert_eq!(me["email"], json!(user.email));

    // Second call returns the same account
    let response = server.get_auth("/api/v1/me", &user.token).await.unwrap();
    let again: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(again["username"], me["username"]);
}

#[tokio::test]
async fn test_missing_auth_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/me").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert!(!body.error.code.is_empty());

    let response = server
        .post("/api/v1/blogs", &CreateBlogRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get_auth("/api/v1/me", "not-a-jwt").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Blog Tests
// ============================================================================

#[tokio::test]
async fn test_create_blog_and_fetch_by_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.register().await.unwrap();

    let suffix = unique_suffix();
    let request = CreateBlogRequest::unique()
        .with_categories(format!("Rust{suffix}, Rust{suffix} , Web{suffix}"))
        .with_tags(format!("[\"async{suffix}\"]"));
    let blog = create_blog(&server, &user, &request).await;

    assert_eq!(blog.title, request.title);
    assert_eq!(blog.author_id, user.id.to_string());
    assert_eq!(blog.author.id, user.id.to_string());
    assert_eq!(
        blog.categories,
        vec![format!("Rust{suffix}"), format!("Web{suffix}")]
    );
    assert_eq!(blog.tags, vec![format!("async{suffix}")]);
    assert_eq!(blog.like_count, 0);
    assert_eq!(blog.view_count, 0);
    assert!(!blog.liked);

    let response = server
        .get(&format!("/api/v1/blogs/{}", blog.slug))
        .await
        .unwrap();
    let fetched: BlogBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, blog.id);
}

#[tokio::test]
async fn test_duplicate_title_gets_suffixed_slug() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.register().await.unwrap();

    let request = CreateBlogRequest::unique();
    let first = create_blog(&server, &user, &request).await;
    let second = create_blog(&server, &user, &request).await;

    assert_ne!(first.slug, second.slug);
    assert_eq!(second.slug, format!("{}-1", first.slug));
}

#[tokio::test]
async fn test_create_blog_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.register().await.unwrap();

    let request = CreateBlogRequest::unique().with_title("Hey");
    let response = server
        .post_auth("/api/v1/blogs", &user.token, &request)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_blogs_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.register().await.unwrap();
    for _ in 0..3 {
        create_blog(&server, &user, &CreateBlogRequest::unique()).await;
    }

    let response = server.get("/api/v1/blogs?page=1&limit=2").await.unwrap();
    let list: BlogListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.blogs.len(), 2);
    assert_eq!(list.pagination.current_page, 1);
    assert_eq!(list.pagination.limit, 2);
    assert!(list.pagination.total_count >= 3);
    assert_eq!(
        list.pagination.total_pages,
        (list.pagination.total_count + 1) / 2
    );
}

#[tokio::test]
async fn test_search_blogs() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.register().await.unwrap();

    let marker = format!("Needle{}", unique_suffix());
    let request = CreateBlogRequest::unique().with_title(format!("Finding the {marker} here"));
    let blog = create_blog(&server, &user, &request).await;

    let response = server
        .get(&format!("/api/v1/blogs/search?query=%20{}%20", marker.to_lowercase()))
        .await
        .unwrap();
    let list: BlogListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.query.as_deref(), Some(marker.to_lowercase().as_str()));
    assert!(list.blogs.iter().any(|b| b.id == blog.id));

    let response = server.get("/api/v1/blogs/search?query=%20").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "EMPTY_SEARCH_QUERY");
}

#[tokio::test]
async fn test_blogs_by_category_and_tags() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.register().await.unwrap();

    let suffix = unique_name("");
    let request = CreateBlogRequest::unique()
        .with_categories(format!("cat{suffix}"))
        .with_tags(format!("tag{suffix}"));
    let blog = create_blog(&server, &user, &request).await;

    let response = server
        .get(&format!("/api/v1/blogs/category/CAT{}", suffix.to_uppercase()))
        .await
        .unwrap();
    let list: BlogListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.category, Some(format!("cat{suffix}")));
    assert_eq!(list.blogs.len(), 1);
    assert_eq!(list.blogs[0].id, blog.id);

    let response = server
        .get(&format!("/api/v1/blogs/tags?tags=tag{suffix},missing{suffix}"))
        .await
        .unwrap();
    let list: BlogListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.blogs.len(), 1);

    let response = server
        .get(&format!("/api/v1/blogs/tags?tags=missing{suffix}"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_TAGS");

    let response = server
        .get(&format!("/api/v1/blogs/category/none{suffix}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_and_delete_require_author() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let other = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;
    let path = format!("/api/v1/blogs/blog/{}", blog.id);

    let update = json!({ "featured": true });
    let response = server.put_auth(&path, &other.token, &update).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_BLOG_AUTHOR");

    let response = server.delete_auth(&path, &other.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.put_auth(&path, &author.token, &update).await.unwrap();
    let updated: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["blog"]["featured"], json!(true));
    assert_eq!(updated["blog"]["slug"], json!(blog.slug));
}

#[tokio::test]
async fn test_delete_blog_removes_dependents() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let reader = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;
    let path = format!("/api/v1/blogs/blog/{}", blog.id);

    server
        .post_empty_auth(&format!("{path}/like"), &reader.token)
        .await
        .unwrap();
    server
        .post_auth(
            &format!("{path}/comments"),
            &reader.token,
            &json!({ "content": "Nice post" }),
        )
        .await
        .unwrap();

    let response = server.delete_auth(&path, &author.token).await.unwrap();
    let deleted: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted["deletedBlogId"], json!(blog.id));

    let response = server.get(&path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get(&format!("{path}/comments")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_invalid_blog_id_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/blogs/blog/not-a-uuid").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(body.error.message.contains("valid UUID"));
}

// ============================================================================
// Interaction Tests
// ============================================================================

#[tokio::test]
async fn test_email_claimed_by_another_subject_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;
    let impostor = server.new_user_with_email(&author.email).unwrap();

    let response = server
        .post_empty_auth(&format!("/api/v1/blogs/blog/{}/like", blog.id), &impostor.token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "EMAIL_ALREADY_EXISTS");

    let response = server
        .get(&format!("/api/v1/blogs/blog/{}", blog.id))
        .await
        .unwrap();
    let fetched: BlogBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.like_count, 0);
}

#[tokio::test]
async fn test_like_toggle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let reader = server.new_user().unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;
    let like_path = format!("/api/v1/blogs/blog/{}/like", blog.id);

    let response = server.post_empty_auth(&like_path, &reader.token).await.unwrap();
    let like: LikeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(like.liked);
    assert_eq!(like.like_count, 1);

    let response = server
        .get_auth(&format!("/api/v1/blogs/blog/{}", blog.id), &reader.token)
        .await
        .unwrap();
    let fetched: BlogBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(fetched.liked);
    assert_eq!(fetched.like_count, 1);

    let response = server.post_empty_auth(&like_path, &reader.token).await.unwrap();
    let unlike: LikeBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!unlike.liked);
    assert_eq!(unlike.like_count, 0);
    assert_ne!(like.message, unlike.message);
}

#[tokio::test]
async fn test_bookmark_shows_in_my_bookmarks() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let reader = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;

    let response = server
        .post_empty_auth(
            &format!("/api/v1/blogs/blog/{}/bookmark", blog.id),
            &reader.token,
        )
        .await
        .unwrap();
    let bookmark: BookmarkBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bookmark.bookmarked);
    assert_eq!(bookmark.bookmark_count, 1);

    let response = server
        .get_auth("/api/v1/me/bookmarks", &reader.token)
        .await
        .unwrap();
    let bookmarks: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(bookmarks["bookmarks"][0]["id"], json!(blog.id));
    assert_eq!(bookmarks["bookmarks"][0]["bookmarked"], json!(true));
    assert_eq!(bookmarks["pagination"]["totalCount"], json!(1));
}

#[tokio::test]
async fn test_view_is_recorded_once_per_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let reader = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;
    let view_path = format!("/api/v1/blogs/blog/{}/view", blog.id);

    let response = server.post_empty_auth(&view_path, &reader.token).await.unwrap();
    let first: ViewBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.recorded);
    assert_eq!(first.view_count, 1);

    let response = server.post_empty_auth(&view_path, &reader.token).await.unwrap();
    let second: ViewBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!second.recorded);
    assert_eq!(second.view_count, 1);

    let response = server
        .get_auth(
            &format!("/api/v1/blogs/blog/{}/interaction", blog.id),
            &reader.token,
        )
        .await
        .unwrap();
    let status: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status["viewed"], json!(true));
    assert_eq!(status["viewCount"], json!(1));
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_threads() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let reader = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;
    let comments_path = format!("/api/v1/blogs/blog/{}/comments", blog.id);

    let response = server
        .post_auth(&comments_path, &reader.token, &json!({ "content": "First!" }))
        .await
        .unwrap();
    let top: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(top.parent_id.is_none());

    let response = server
        .post_auth(
            &comments_path,
            &author.token,
            &json!({ "content": "Thanks", "parentId": top.id }),
        )
        .await
        .unwrap();
    let reply: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reply.parent_id.as_deref(), Some(top.id.as_str()));

    let response = server
        .post_auth(
            &comments_path,
            &reader.token,
            &json!({ "content": "Too deep", "parentId": reply.id }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PARENT_COMMENT");

    let response = server.get(&comments_path).await.unwrap();
    let list: CommentListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.comments.len(), 1);
    assert_eq!(list.pagination.total_count, 1);
    let replies = list.comments[0].replies.as_ref().expect("replies embedded");
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].content, "Thanks");

    let response = server
        .get(&format!("/api/v1/blogs/blog/{}", blog.id))
        .await
        .unwrap();
    let fetched: BlogBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.comment_count, 2);
}

#[tokio::test]
async fn test_comment_edit_and_delete_by_author_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let reader = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;

    let response = server
        .post_auth(
            &format!("/api/v1/blogs/blog/{}/comments", blog.id),
            &reader.token,
            &json!({ "content": "Typo heer" }),
        )
        .await
        .unwrap();
    let comment: CommentBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/comments/{}", comment.id);

    let edit = json!({ "content": "Typo here" });
    let response = server.patch_auth(&path, &author.token, &edit).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_COMMENT_AUTHOR");

    let response = server.patch_auth(&path, &reader.token, &edit).await.unwrap();
    let edited: CommentBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.content, "Typo here");

    let response = server.delete_auth(&path, &reader.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &reader.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// User & Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = server.register().await.unwrap();
    let bob = server.register().await.unwrap();
    let base = format!("/api/v1/users/{}", bob.id);

    let response = server
        .post_empty_auth(&format!("{base}/follow"), &alice.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_empty_auth(&format!("{base}/follow"), &alice.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .get_auth(&format!("{base}/follow-status"), &alice.token)
        .await
        .unwrap();
    let status: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(status["isFollowing"], json!(true));

    let response = server.get(&base).await.unwrap();
    let profile: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile["followerCount"], json!(1));
    assert!(profile["user"].get("email").is_none());

    let response = server
        .delete_auth(&format!("{base}/unfollow"), &alice.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("{base}/unfollow"), &alice.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_cannot_follow_self() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let user = server.register().await.unwrap();

    let response = server
        .post_empty_auth(&format!("/api/v1/users/{}/follow", user.id), &user.token)
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "CANNOT_FOLLOW_SELF");
}

#[tokio::test]
async fn test_user_blogs_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;

    let response = server
        .get(&format!("/api/v1/users/{}/blogs", author.id))
        .await
        .unwrap();
    let list: BlogListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.pagination.total_count, 1);
    assert_eq!(list.blogs[0].id, blog.id);
}

// ============================================================================
// GraphQL Tests
// ============================================================================

#[tokio::test]
async fn test_graphql_blog_with_viewer_flags() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    let reader = server.register().await.unwrap();
    let blog = create_blog(&server, &author, &CreateBlogRequest::unique()).await;

    server
        .post_empty_auth(&format!("/api/v1/blogs/blog/{}/like", blog.id), &reader.token)
        .await
        .unwrap();

    let query = format!(
        r#"{{ blog(slug: "{}") {{ id title likeCount liked bookmarked author {{ id }} }} }}"#,
        blog.slug
    );

    let anonymous = server.graphql(&query, None).await.unwrap();
    assert!(anonymous.get("errors").is_none(), "{anonymous}");
    assert_eq!(anonymous["data"]["blog"]["likeCount"], json!(1));
    assert_eq!(anonymous["data"]["blog"]["liked"], json!(false));

    let viewer = server.graphql(&query, Some(&reader.token)).await.unwrap();
    assert_eq!(viewer["data"]["blog"]["liked"], json!(true));
    assert_eq!(viewer["data"]["blog"]["author"]["id"], json!(author.id.to_string()));

    let missing = server
        .graphql(r#"{ blog(slug: "no-such-post-anywhere") { id } }"#, None)
        .await
        .unwrap();
    assert_eq!(missing["data"]["blog"], Value::Null);
}

#[tokio::test]
async fn test_graphql_unknown_taxonomy_is_empty() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let suffix = unique_suffix();

    let query = format!(
        r#"{{
            blogsByTags(tags: "ghost{suffix}") {{ blogs {{ id }} pagination {{ totalCount }} }}
            blogsByCategory(category: "Ghost{suffix}") {{ category blogs {{ id }} }}
        }}"#
    );
    let response = server.graphql(&query, None).await.unwrap();
    assert!(response.get("errors").is_none(), "{response}");
    assert_eq!(response["data"]["blogsByTags"]["blogs"], json!([]));
    assert_eq!(
        response["data"]["blogsByTags"]["pagination"]["totalCount"],
        json!(0)
    );
    assert_eq!(
        response["data"]["blogsByCategory"]["category"],
        json!(format!("Ghost{suffix}"))
    );
    assert_eq!(response["data"]["blogsByCategory"]["blogs"], json!([]));
}

#[tokio::test]
async fn test_graphql_blogs_pagination() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let author = server.register().await.unwrap();
    create_blog(&server, &author, &CreateBlogRequest::unique()).await;

    let response = server
        .graphql(
            "{ blogs(page: 0, limit: 1) { blogs { id } pagination { currentPage limit } } }",
            None,
        )
        .await
        .unwrap();
    assert_eq!(response["data"]["blogs"]["blogs"].as_array().map(Vec::len), Some(1));
    assert_eq!(response["data"]["blogs"]["pagination"]["currentPage"], json!(1));
    assert_eq!(response["data"]["blogs"]["pagination"]["limit"], json!(1));
}
