use super::PostCommentService;
use crate::{
    application::{dto::PostCommentDto, error::ApplicationResult},
    domain::comment::CommentId,
};

#[derive(Debug, Clone, Copy)]
pub struct GetPostCommentQuery {
    pub id: i64,
}

impl PostCommentService {
    #[tracing::instrument(skip(self))]
    pub async fn get_comment(
        &self,
        query: GetPostCommentQuery,
    ) -> ApplicationResult<PostCommentDto> {
        let id = CommentId::new(query.id)?;
        let comment = self.comment_repo.find_by_id(id).await?;
        Ok(comment.into())
    }
}
