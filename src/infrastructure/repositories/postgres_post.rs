// src/infrastructure/repositories/postgres_post.rs
use super::{map_sqlx, map_sqlx_for_title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::post::{Content, NewPost, Post, PostId, PostRepository, PostUpdate, Title};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, Transaction};

/// Key space for `pg_advisory_xact_lock(int, int)` so title locks never
/// collide with other advisory lock users of the same database.
const TITLE_LOCK_SPACE: i32 = 0x706f_7374;

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: Title::new(row.title)?,
            content: Content::new(row.content)?,
            comments: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

fn not_found(id: PostId) -> DomainError {
    DomainError::NotFound(format!("post {id} not found"))
}

impl PostgresPostRepository {
    /// Row-locks a live post for the rest of the transaction.
    async fn lock_active(tx: &mut Transaction<'_, Postgres>, id: PostId) -> DomainResult<()> {
        let locked = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM posts WHERE id = $1 AND deleted_at IS NULL FOR UPDATE",
        )
        .bind(i64::from(id))
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        locked.map(|_| ()).ok_or_else(|| not_found(id))
    }

    /// Serializes writers of the same title, then looks for a live post
    /// (other than `exclude`) that already uses it.
    async fn ensure_title_available(
        tx: &mut Transaction<'_, Postgres>,
        title: &Title,
        exclude: Option<PostId>,
    ) -> DomainResult<()> {
        sqlx::query("SELECT pg_advisory_xact_lock($1, hashtext($2))")
            .bind(TITLE_LOCK_SPACE)
            .bind(title.as_str())
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;

        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM posts
                 WHERE title = $1 AND deleted_at IS NULL AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(title.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&mut **tx)
        .await
        .map_err(map_sqlx)?;

        if taken {
            tracing::warn!(title = %title, "rejecting duplicate post title");
            return Err(DomainError::DuplicateTitle(title.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, created_at, updated_at, deleted_at
             FROM posts WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()?.ok_or_else(|| not_found(id))
    }

    async fn paginate(&self, page: PageRequest) -> DomainResult<(Vec<Post>, u64)> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        // One snapshot for both statements keeps the total consistent with the page.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM posts WHERE deleted_at IS NULL",
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, created_at, updated_at, deleted_at
             FROM posts WHERE deleted_at IS NULL
             ORDER BY id DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        let posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((posts, u64::try_from(total).unwrap_or_default()))
    }

    async fn create(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost { title, content } = post;
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        Self::ensure_title_available(&mut tx, &title, None).await?;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, content)
             VALUES ($1, $2)
             RETURNING id, title, content, created_at, updated_at, deleted_at",
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| map_sqlx_for_title(err, Some(&title)))?;

        tx.commit()
            .await
            .map_err(|err| map_sqlx_for_title(err, Some(&title)))?;

        tracing::debug!(post_id = row.id, "inserted post");
        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate { id, title, content } = update;
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        Self::lock_active(&mut tx, id).await?;
        if let Some(title) = &title {
            Self::ensure_title_available(&mut tx, title, Some(id)).await?;
        }

        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts
             SET title = COALESCE($2, title),
                 content = COALESCE($3, content),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, title, content, created_at, updated_at, deleted_at",
        )
        .bind(i64::from(id))
        .bind(title.as_ref().map(Title::as_str))
        .bind(content.as_ref().map(Content::as_str))
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| map_sqlx_for_title(err, title.as_ref()))?;

        tx.commit()
            .await
            .map_err(|err| map_sqlx_for_title(err, title.as_ref()))?;

        tracing::debug!(post_id = row.id, "updated post");
        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        Self::lock_active(&mut tx, id).await?;

        sqlx::query("UPDATE posts SET deleted_at = now(), updated_at = now() WHERE id = $1")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let comments = sqlx::query(
            "UPDATE post_comments SET deleted_at = now(), updated_at = now()
             WHERE post_id = $1 AND deleted_at IS NULL",
        )
        .bind(i64::from(id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        tracing::debug!(
            post_id = %id,
            comments = comments.rows_affected(),
            "soft-deleted post"
        );
        Ok(())
    }
}
