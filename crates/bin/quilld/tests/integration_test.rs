//! End-to-end tests for the full quilld stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repos,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use quill_adapter_http_axum::router;
use quill_adapter_http_axum::state::AppState;
use quill_adapter_storage_sqlite_sqlx::{
    Config, SqliteCategoryRepository, SqliteCommentRepository, SqlitePostRepository,
    SqliteUserRepository,
};
use quill_app::services::category_service::CategoryService;
use quill_app::services::comment_service::CommentService;
use quill_app::services::post_service::PostService;
use quill_app::services::user_service::UserService;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config::in_memory()
        .build()
        .await
        .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let state = AppState::new(
        UserService::new(SqliteUserRepository::new(pool.clone())),
        PostService::new(SqlitePostRepository::new(pool.clone())),
        CategoryService::new(SqliteCategoryRepository::new(pool.clone())),
        CommentService::new(SqliteCommentRepository::new(pool)),
    );

    router::build(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn send_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(resp: Response<Body>) -> Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

fn post_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "An introduction",
        "category": "rust",
        "topic": "web",
        "body": "Long form text",
        "tags": "axum,sqlx"
    })
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_echo_user_fields_with_generated_id() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/user",
            &json!({"name": "A", "email": "a@x.com", "description": "d"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(
        body,
        json!({"id": id, "name": "A", "email": "a@x.com", "description": "d"})
    );

    let resp = app.oneshot(get(&format!("/user/{id}"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, body);
}

#[tokio::test]
async fn should_return_not_found_when_user_missing() {
    let resp = app().await.oneshot(get("/user/999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "User 999 not found");
}

#[tokio::test]
async fn should_return_bad_request_when_user_field_missing() {
    let resp = app()
        .await
        .oneshot(send_json(
            "POST",
            "/user",
            &json!({"name": "A", "email": "a@x.com"}),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_exactly_the_created_post_without_hidden_fields() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(send_json("POST", "/post", &post_body("Hello")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;

    let resp = app.oneshot(get("/post")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = read_json(resp).await;
    let list = list.as_array().unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0], created);
    let fields = list[0].as_object().unwrap();
    assert!(!fields.contains_key("registered"));
    assert!(!fields.contains_key("user_id"));
    assert!(!fields.contains_key("upvote"));
}

#[tokio::test]
async fn should_reject_second_post_with_same_name() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(send_json("POST", "/post", &post_body("Hello")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(send_json("POST", "/post", &post_body("Hello")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert!(read_json(resp).await["error"].is_string());

    let resp = app.oneshot(get("/post")).await.unwrap();
    let list = read_json(resp).await;
    let named_hello = list
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["name"] == "Hello")
        .count();
    assert_eq!(named_hello, 1);
}

#[tokio::test]
async fn should_overwrite_post_fields_on_put() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(send_json("POST", "/post", &post_body("Hello")))
        .await
        .unwrap();
    let id = read_json(resp).await["id"].as_i64().unwrap();

    let replacement = json!({
        "name": "Goodbye",
        "description": "An ending",
        "category": "go",
        "topic": "cli",
        "body": "Short text",
        "tags": "cobra"
    });
    let resp = app
        .clone()
        .oneshot(send_json("PUT", &format!("/post/{id}"), &replacement))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let mut expected = replacement.clone();
    expected["id"] = json!(id);
    assert_eq!(read_json(resp).await, expected);

    let resp = app.oneshot(get(&format!("/post/{id}"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, expected);
}

#[tokio::test]
async fn should_return_not_found_when_post_missing() {
    let resp = app().await.oneshot(get("/post/12345")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_post() {
    let resp = app()
        .await
        .oneshot(send_json("PUT", "/post/77", &post_body("Ghost")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_conflict_when_renaming_post_onto_taken_name() {
    let app = app().await;

    app.clone()
        .oneshot(send_json("POST", "/post", &post_body("Taken")))
        .await
        .unwrap();
    let resp = app
        .clone()
        .oneshot(send_json("POST", "/post", &post_body("Free")))
        .await
        .unwrap();
    let id = read_json(resp).await["id"].as_i64().unwrap();

    let resp = app
        .oneshot(send_json("PUT", &format!("/post/{id}"), &post_body("Taken")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn should_return_bad_request_when_post_id_is_not_numeric() {
    let resp = app().await.oneshot(get("/post/first")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_category_and_reject_duplicate() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(send_json("POST", "/category", &json!({"name": "rust"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = read_json(resp).await;
    assert_eq!(body["name"], "rust");
    assert!(body["id"].as_i64().unwrap() > 0);

    let resp = app
        .oneshot(send_json("POST", "/category", &json!({"name": "rust"})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_pass_comment_votes_through_unchanged() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/comment",
            &json!({"title": "Nice", "body": "Great read", "upvote": 10, "downvote": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["upvote"], 10);
    assert_eq!(created["downvote"], 3);

    let resp = app.oneshot(get("/comment")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list = read_json(resp).await;
    assert_eq!(list, json!([created]));

    let fields = list[0].as_object().unwrap();
    assert!(!fields.contains_key("created"));
    assert!(!fields.contains_key("post_id"));
}

#[tokio::test]
async fn should_return_bad_request_when_comment_votes_missing() {
    let resp = app()
        .await
        .oneshot(send_json(
            "POST",
            "/comment",
            &json!({"title": "Nice", "body": "Great read"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
