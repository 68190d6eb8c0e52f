use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

/// Storage contract for posts.
///
/// Every operation ignores soft-deleted rows. Multi-step operations
/// (count + fetch, uniqueness check + write, fetch + delete) must run as a
/// single atomic unit in the implementation.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fails with `NotFound` when the post is absent or soft-deleted.
    async fn find_by_id(&self, id: PostId) -> DomainResult<Post>;

    /// Posts ordered by id descending, together with the total count of
    /// non-deleted posts taken from the same snapshot.
    async fn paginate(&self, page: PageRequest) -> DomainResult<(Vec<Post>, u64)>;

    /// Fails with `DuplicateTitle` when a non-deleted post already uses the
    /// title; nothing is written in that case.
    async fn create(&self, post: NewPost) -> DomainResult<Post>;

    /// Title uniqueness is checked against every other non-deleted post.
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;

    /// Soft-deletes the post and its comments.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}
