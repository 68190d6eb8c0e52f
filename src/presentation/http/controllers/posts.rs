// src/presentation/http/controllers/posts.rs
use crate::application::{
    dto::PostDto,
    posts::{
        CreatePostCommand, DeletePostCommand, GetPostQuery, ListPostsQuery, UpdatePostCommand,
    },
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::pagination::{PageParams, PaginatedResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[schema(example = "My post title")]
    pub title: String,
    #[schema(example = "Post content here")]
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default)]
    #[schema(example = "My post title")]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(example = "Post content here")]
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PageParams),
    responses(
        (status = 200, description = "Page of posts, newest first.", body = PaginatedResponse<PostDto>),
        (status = 400, description = "Invalid page parameters.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResponse<PostDto>>> {
    let page = state
        .services
        .posts
        .list_posts(ListPostsQuery {
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post with its comments.", body = PostDto),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .posts
        .get_post(GetPostQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 400, description = "Title or content failed validation.", body = ErrorResponse),
        (status = 409, description = "A post with this title already exists.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
    };

    let created = state
        .services
        .posts
        .create_post(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated.", body = PostDto),
        (status = 400, description = "Nothing to update or invalid field.", body = ErrorResponse),
        (status = 404, description = "Post not found.", body = ErrorResponse),
        (status = 409, description = "Another post already uses this title.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .posts
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post and its comments deleted."),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .posts
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
