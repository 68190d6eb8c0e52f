// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::infrastructure::database;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{comments, posts},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, StatusCode},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

pub fn build_router(state: HttpState, config: &AppConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router(config.app_name()))
        .route("/health", get(health))
        .route("/health/db", get(health_db))
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/v1/posts/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/api/v1/posts/{post_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/api/v1/comments/{id}", get(comments::get_comment))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(request_timeout_layer(config.request_timeout()))
        .layer(Extension(state))
}

/// Requests still running after `timeout` are answered with 408.
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

#[utoipa::path(
    get,
    path = "/health/db",
    responses(
        (status = 200, description = "Database is reachable.", body = StatusResponse),
        (status = 503, description = "Database is unreachable.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health_db(
    Extension(state): Extension<HttpState>,
) -> (StatusCode, Json<StatusResponse>) {
    match database::ping(&state.db_pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "ok".into(),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse {
                    status: "unavailable".into(),
                }),
            )
        }
    }
}
