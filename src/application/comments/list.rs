use super::PostCommentService;
use crate::{
    application::{
        dto::{Paginated, PostCommentDto},
        error::ApplicationResult,
    },
    domain::{pagination::PageRequest, post::PostId},
};

#[derive(Debug, Clone, Copy)]
pub struct ListPostCommentsQuery {
    pub post_id: i64,
    pub page: i64,
    pub per_page: i64,
}

impl PostCommentService {
    #[tracing::instrument(skip(self))]
    pub async fn list_comments(
        &self,
        query: ListPostCommentsQuery,
    ) -> ApplicationResult<Paginated<PostCommentDto>> {
        let post_id = PostId::new(query.post_id)?;
        let request = PageRequest::new(query.page, query.per_page)?;
        let (comments, total) = self.comment_repo.paginate(post_id, request).await?;

        Ok(Paginated::new(comments, request, total).map(PostCommentDto::from))
    }
}
