// src/presentation/http/controllers/comments.rs
use crate::application::{
    comments::{CreatePostCommentCommand, GetPostCommentQuery, ListPostCommentsQuery},
    dto::PostCommentDto,
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
pub struct CreatePostCommentRequest {
    #[schema(example = "Great post")]
    pub text: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    params(("post_id" = i64, Path, description = "Post id"), PageParams),
    responses(
        (status = 200, description = "Page of comments, newest first.", body = PaginatedResponse<PostCommentDto>),
        (status = 400, description = "Invalid page parameters.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResponse<PostCommentDto>>> {
    let page = state
        .services
        .comments
        .list_comments(ListPostCommentsQuery {
            post_id,
            page: params.page,
            per_page: params.per_page,
        })
        .await
        .into_http()?;

    Ok(Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    params(("post_id" = i64, Path, description = "Post id")),
    request_body = CreatePostCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = PostCommentDto),
        (status = 400, description = "Comment text failed validation.", body = ErrorResponse),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Path(post_id): Path<i64>,
    Json(payload): Json<CreatePostCommentRequest>,
) -> HttpResult<(StatusCode, Json<PostCommentDto>)> {
    let created = state
        .services
        .comments
        .create_comment(CreatePostCommentCommand {
            post_id,
            text: payload.text,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "The comment.", body = PostCommentDto),
        (status = 404, description = "Comment not found.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn get_comment(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostCommentDto>> {
    state
        .services
        .comments
        .get_comment(GetPostCommentQuery { id })
        .await
        .into_http()
        .map(Json)
}
