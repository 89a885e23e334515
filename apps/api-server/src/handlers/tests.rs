//! Endpoint tests against in-memory state.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use postdesk_core::CrudService;
use postdesk_core::domain::{NewPost, Post};

use super::configure_routes;
use crate::state::AppState;

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

async fn seed_post(state: &AppState, title: &str) -> Post {
    state
        .posts
        .create(NewPost {
            title: title.to_string(),
            content: format!("Content of {title}"),
        })
        .await
        .unwrap()
}

async fn seed_posts(state: &AppState, n: usize) {
    for i in 0..n {
        seed_post(state, &format!("Test Post {i}")).await;
    }
}

#[actix_rt::test]
async fn test_health() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_create_post_success() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({ "title": "Test Post Title", "content": "This is a test post content" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "Test Post Title");
    assert_eq!(body["data"]["content"], "This is a test post content");
    assert_eq!(body["message"], "Post created successfully");
    assert_ne!(body["data"]["id"], 0);
}

#[actix_rt::test]
async fn test_create_post_validation_error_is_bad_request() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({ "title": "", "content": "This is a test post content" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "title is required");
}

#[actix_rt::test]
async fn test_create_post_malformed_body() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/posts")
        .insert_header(ContentType::json())
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request data"));
}

#[actix_rt::test]
async fn test_get_post_by_id() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    let post = seed_post(&state, "Test Fetch").await;

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], post.title);
    assert_eq!(body["data"]["content"], post.content);
    assert!(body.get("message").is_none());
}

#[actix_rt::test]
async fn test_get_post_not_found_and_bad_id() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts/9999").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("post not found"));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts/abc").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid ID format");
}

#[actix_rt::test]
async fn test_list_posts_default_pagination() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    seed_posts(&state, 12).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total"], 12);
}

#[actix_rt::test]
async fn test_list_posts_custom_pagination() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    seed_posts(&state, 12).await;

    let req = test::TestRequest::get().uri("/posts?page=2&limit=5").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["title"], "Test Post 5");
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 5);
    assert_eq!(body["total"], 12);
}

#[actix_rt::test]
async fn test_list_posts_invalid_params_fall_back_to_defaults() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/posts?page=abc&limit=xyz").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total"], 0);
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_update_post() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    let post = seed_post(&state, "Test Update").await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", post.id))
        .set_json(json!({ "title": "Updated Title", "content": "Updated Content" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "Updated Title");
    assert_eq!(body["data"]["content"], "Updated Content");
    assert_eq!(body["data"]["id"], post.id);
    assert_eq!(body["message"], "Post updated successfully");
}

#[actix_rt::test]
async fn test_update_post_failures() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    let post = seed_post(&state, "Test Update").await;

    let req = test::TestRequest::put()
        .uri("/posts/9999")
        .set_json(json!({ "title": "Updated Title", "content": "Updated Content" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", post.id))
        .set_json(json!({ "title": "Only a title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "content is required");
}

#[actix_rt::test]
async fn test_patch_post_content_only() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    let post = seed_post(&state, "Test Patch").await;

    let req = test::TestRequest::patch()
        .uri(&format!("/posts/{}", post.id))
        .set_json(json!({ "content": "Patched content" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "Test Patch");
    assert_eq!(body["data"]["content"], "Patched content");
}

#[actix_rt::test]
async fn test_patch_post_empty_title_is_rejected_and_nothing_changes() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    let post = seed_post(&state, "Test Patch").await;

    let req = test::TestRequest::patch()
        .uri(&format!("/posts/{}", post.id))
        .set_json(json!({ "title": "", "content": "Ignored" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "title cannot be empty");

    let stored = state.posts.get_by_id(post.id).await.unwrap();
    assert_eq!(stored, post);
}

#[actix_rt::test]
async fn test_patch_post_without_fields() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    // The id does not exist; the empty body is rejected before any lookup.
    let req = test::TestRequest::patch()
        .uri("/posts/9999")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No data provided for update");
}

#[actix_rt::test]
async fn test_patch_missing_post() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::patch()
        .uri("/posts/9999")
        .set_json(json!({ "title": "New" }))
        .to_request();

    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_delete_post() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    let post = seed_post(&state, "Test Delete").await;
    let uri = format!("/posts/{}", post.id);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Post deleted successfully" }));

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_user_lifecycle_hides_password_hash() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "name": "Connor Tran",
            "email": "connor@example.com",
            "password": "abcxyz123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created successfully");
    assert!(body["data"].get("password_hash").is_none());
    assert!(body["data"].get("password").is_none());
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/users/{id}"))
        .set_json(json!({ "name": "Connor" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Connor");
    assert_eq!(body["data"]["email"], "connor@example.com");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 1);

    let req = test::TestRequest::delete().uri(&format!("/users/{id}")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_duplicate_user_email_is_conflict() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    let payload = json!({
        "name": "Connor",
        "email": "connor@example.com",
        "password": "abcxyz123"
    });

    let req = test::TestRequest::post().uri("/users").set_json(&payload).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post().uri("/users").set_json(&payload).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);
}

#[actix_rt::test]
async fn test_invalid_user_email_is_bad_request() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "name": "Connor", "email": "not-an-email", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "email is invalid");
}

#[actix_rt::test]
async fn test_whitespace_only_fields_are_kept() {
    let state = AppState::in_memory();
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({ "title": "   ", "content": "body" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "   ");
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/posts/{id}"))
        .set_json(json!({ "content": " " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "   ");
    assert_eq!(body["data"]["content"], " ");
}

#[actix_rt::test]
async fn test_list_posts_caps_oversized_limit() {
    let state = AppState::in_memory();
    let app = init_app!(state);
    seed_posts(&state, 3).await;

    let req = test::TestRequest::get()
        .uri("/posts?limit=18446744073709551615")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["limit"], i64::MAX);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}
