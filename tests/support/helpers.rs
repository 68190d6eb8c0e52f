// tests/support/helpers.rs
use super::mocks::MemoryStore;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use blog_core::application::services::ApplicationServices;
use blog_core::config::AppConfig;
use blog_core::domain::{comment::PostCommentRepository, post::PostRepository};
use blog_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

pub fn build_services(store: &MemoryStore) -> ApplicationServices {
    let post_repo: Arc<dyn PostRepository> = Arc::new(store.post_repo());
    let comment_repo: Arc<dyn PostCommentRepository> = Arc::new(store.comment_repo());
    ApplicationServices::new(post_repo, comment_repo)
}

pub fn build_test_state(store: &MemoryStore) -> HttpState {
    // Lazy pool: nothing connects unless /health/db is hit.
    let db_pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/blog_test")
        .expect("connect_lazy");

    HttpState {
        services: Arc::new(build_services(store)),
        db_pool,
    }
}

pub fn make_test_router(store: &MemoryStore) -> axum::Router {
    build_router(build_test_state(store), &AppConfig::default())
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Asserts an `{error, message}` body with the expected status and reason.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
