// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::get_comment,
        super::routes::health,
        super::routes::health_db
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::pagination::PaginationMeta,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::comments::CreatePostCommentRequest,
            crate::application::dto::PostDto,
            crate::application::dto::PostCommentDto
        )
    ),
    tags(
        (name = "Posts", description = "Blog post endpoints"),
        (name = "Comments", description = "Post comment endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Blog API",
        description = "Posts and comments with paginated listings",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// The OpenAPI document titled after the running application.
pub fn api_doc(app_name: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if !app_name.trim().is_empty() {
        doc.info.title = app_name.to_string();
    }
    doc
}

pub fn docs_router(app_name: &str) -> Router {
    let openapi = api_doc(app_name);
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document served at `/openapi.json` to [`snapshot_path`].
pub fn write_openapi_snapshot(app_name: &str) -> std::io::Result<()> {
    write_openapi_snapshot_to(snapshot_path(), app_name)
}

pub fn write_openapi_snapshot_to(path: impl AsRef<Path>, app_name: &str) -> std::io::Result<()> {
    let spec = api_doc(app_name);
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi/openapi.json".to_string())
}
