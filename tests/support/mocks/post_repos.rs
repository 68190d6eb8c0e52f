// tests/support/mocks/post_repos.rs
//! In-memory repositories sharing one store, so soft deletes of a post are
//! visible to the comment side the same way the Postgres tables are.
use super::time::fixed_now;
use async_trait::async_trait;
use blog_core::domain::comment::{CommentId, NewPostComment, PostComment, PostCommentRepository};
use blog_core::domain::errors::{DomainError, DomainResult};
use blog_core::domain::pagination::PageRequest;
use blog_core::domain::post::{NewPost, Post, PostId, PostRepository, PostUpdate};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Tables {
    posts: Vec<Post>,
    comments: Vec<PostComment>,
    next_post_id: i64,
    next_comment_id: i64,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_repo(&self) -> MemoryPostRepo {
        MemoryPostRepo {
            store: self.clone(),
        }
    }

    pub fn comment_repo(&self) -> MemoryCommentRepo {
        MemoryCommentRepo {
            store: self.clone(),
        }
    }

    /// Inserts a prebuilt post as-is, bypassing the title check.
    pub fn seed_post(&self, post: Post) {
        let mut tables = self.lock();
        tables.next_post_id = tables.next_post_id.max(i64::from(post.id));
        tables.posts.push(post);
    }

    /// Rows including soft-deleted ones.
    pub fn raw_comment_count(&self) -> usize {
        self.lock().comments.len()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.inner.lock().expect("memory store poisoned")
    }
}

fn post_not_found(id: PostId) -> DomainError {
    DomainError::NotFound(format!("post {id} not found"))
}

fn window<T: Clone>(mut rows: Vec<T>, page: PageRequest) -> (Vec<T>, u64) {
    let total = rows.len() as u64;
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    let page_rows = rows.drain(..).skip(offset).take(limit).collect();
    (page_rows, total)
}

impl Tables {
    fn live_post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id && p.deleted_at.is_none())
    }

    fn title_taken(&self, title: &str, exclude: Option<PostId>) -> bool {
        self.posts.iter().any(|p| {
            p.deleted_at.is_none() && p.title.as_str() == title && Some(p.id) != exclude
        })
    }
}

pub struct MemoryPostRepo {
    store: MemoryStore,
}

#[async_trait]
impl PostRepository for MemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Post> {
        let tables = self.store.lock();
        tables.live_post(id).cloned().ok_or_else(|| post_not_found(id))
    }

    async fn paginate(&self, page: PageRequest) -> DomainResult<(Vec<Post>, u64)> {
        let tables = self.store.lock();
        let mut live: Vec<Post> = tables
            .posts
            .iter()
            .filter(|p| p.deleted_at.is_none())
            .cloned()
            .collect();
        live.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(window(live, page))
    }

    async fn create(&self, post: NewPost) -> DomainResult<Post> {
        let mut tables = self.store.lock();
        if tables.title_taken(post.title.as_str(), None) {
            return Err(DomainError::DuplicateTitle(post.title.to_string()));
        }
        tables.next_post_id += 1;
        let created = Post {
            id: PostId::new(tables.next_post_id)?,
            title: post.title,
            content: post.content,
            comments: Vec::new(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
            deleted_at: None,
        };
        tables.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut tables = self.store.lock();
        if tables.live_post(update.id).is_none() {
            return Err(post_not_found(update.id));
        }
        if let Some(title) = &update.title {
            if tables.title_taken(title.as_str(), Some(update.id)) {
                return Err(DomainError::DuplicateTitle(title.to_string()));
            }
        }
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| post_not_found(update.id))?;
        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        post.updated_at = fixed_now();
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut tables = self.store.lock();
        if tables.live_post(id).is_none() {
            return Err(post_not_found(id));
        }
        let now = fixed_now();
        for post in tables.posts.iter_mut().filter(|p| p.id == id) {
            post.deleted_at = Some(now);
        }
        for comment in tables
            .comments
            .iter_mut()
            .filter(|c| c.post_id == id && c.deleted_at.is_none())
        {
            comment.deleted_at = Some(now);
        }
        Ok(())
    }
}

pub struct MemoryCommentRepo {
    store: MemoryStore,
}

#[async_trait]
impl PostCommentRepository for MemoryCommentRepo {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<PostComment> {
        let tables = self.store.lock();
        tables
            .comments
            .iter()
            .find(|c| c.id == id && c.deleted_at.is_none())
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("comment {id} not found")))
    }

    async fn find_by_post_id(&self, post_id: PostId) -> DomainResult<Vec<PostComment>> {
        let tables = self.store.lock();
        let mut rows: Vec<PostComment> = tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id && c.deleted_at.is_none())
            .cloned()
            .collect();
        rows.sort_by_key(|c| c.id);
        Ok(rows)
    }

    async fn paginate(
        &self,
        post_id: PostId,
        page: PageRequest,
    ) -> DomainResult<(Vec<PostComment>, u64)> {
        let tables = self.store.lock();
        let mut live: Vec<PostComment> = tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id && c.deleted_at.is_none())
            .cloned()
            .collect();
        live.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(window(live, page))
    }

    async fn create(&self, comment: NewPostComment) -> DomainResult<PostComment> {
        let mut tables = self.store.lock();
        if tables.live_post(comment.post_id).is_none() {
            return Err(post_not_found(comment.post_id));
        }
        tables.next_comment_id += 1;
        let created = PostComment {
            id: CommentId::new(tables.next_comment_id)?,
            post_id: comment.post_id,
            text: comment.text,
            created_at: fixed_now(),
            updated_at: fixed_now(),
            deleted_at: None,
        };
        tables.comments.push(created.clone());
        Ok(created)
    }
}
