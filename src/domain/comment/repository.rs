use crate::domain::comment::entity::{NewPostComment, PostComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::post::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostCommentRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<PostComment>;

    /// All non-deleted comments of a post in creation order.
    async fn find_by_post_id(&self, post_id: PostId) -> DomainResult<Vec<PostComment>>;

    /// Comments of one post ordered by id descending, plus their total count.
    async fn paginate(
        &self,
        post_id: PostId,
        page: PageRequest,
    ) -> DomainResult<(Vec<PostComment>, u64)>;

    /// The owning post is not re-checked here; callers verify it exists.
    /// Fails with `NotFound` unless the owning post is live when the comment
    /// is written; checking and inserting are one atomic unit.
    async fn create(&self, comment: NewPostComment) -> DomainResult<PostComment>;
}
