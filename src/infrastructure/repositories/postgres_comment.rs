// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::comment::{
    CommentId, CommentText, NewPostComment, PostComment, PostCommentRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::post::PostId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPostCommentRepository {
    pool: PgPool,
}

impl PostgresPostCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostCommentRow {
    id: i64,
    post_id: i64,
    text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostCommentRow> for PostComment {
    type Error = DomainError;

    fn try_from(row: PostCommentRow) -> Result<Self, Self::Error> {
        Ok(PostComment {
            id: CommentId::new(row.id)?,
            post_id: PostId::new(row.post_id)?,
            text: CommentText::new(row.text)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

fn into_comments(rows: Vec<PostCommentRow>) -> DomainResult<Vec<PostComment>> {
    rows.into_iter().map(PostComment::try_from).collect()
}

#[async_trait]
impl PostCommentRepository for PostgresPostCommentRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<PostComment> {
        let row = sqlx::query_as::<_, PostCommentRow>(
            "SELECT id, post_id, text, created_at, updated_at, deleted_at
             FROM post_comments WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PostComment::try_from)
            .transpose()?
            .ok_or_else(|| DomainError::NotFound(format!("comment {id} not found")))
    }

    async fn find_by_post_id(&self, post_id: PostId) -> DomainResult<Vec<PostComment>> {
        let rows = sqlx::query_as::<_, PostCommentRow>(
            "SELECT id, post_id, text, created_at, updated_at, deleted_at
             FROM post_comments
             WHERE post_id = $1 AND deleted_at IS NULL
             ORDER BY id ASC",
        )
        .bind(i64::from(post_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_comments(rows)
    }

    async fn paginate(
        &self,
        post_id: PostId,
        page: PageRequest,
    ) -> DomainResult<(Vec<PostComment>, u64)> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM post_comments WHERE post_id = $1 AND deleted_at IS NULL",
        )
        .bind(i64::from(post_id))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, PostCommentRow>(
            "SELECT id, post_id, text, created_at, updated_at, deleted_at
             FROM post_comments
             WHERE post_id = $1 AND deleted_at IS NULL
             ORDER BY id DESC
             LIMIT $2 OFFSET $3",
        )
        .bind(i64::from(post_id))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Ok((into_comments(rows)?, u64::try_from(total).unwrap_or_default()))
    }

    async fn create(&self, comment: NewPostComment) -> DomainResult<PostComment> {
        let NewPostComment { post_id, text } = comment;
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // Holds the post row against a concurrent soft delete until commit.
        let live = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM posts WHERE id = $1 AND deleted_at IS NULL FOR SHARE",
        )
        .bind(i64::from(post_id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if live.is_none() {
            return Err(DomainError::NotFound(format!("post {post_id} not found")));
        }

        let row = sqlx::query_as::<_, PostCommentRow>(
            "INSERT INTO post_comments (post_id, text)
             VALUES ($1, $2)
             RETURNING id, post_id, text, created_at, updated_at, deleted_at",
        )
        .bind(i64::from(post_id))
        .bind(text.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        tracing::debug!(comment_id = row.id, post_id = row.post_id, "inserted comment");
        PostComment::try_from(row)
    }
}
