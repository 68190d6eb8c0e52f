use super::PostService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::PostId,
};

#[derive(Debug, Clone, Copy)]
pub struct GetPostQuery {
    pub id: i64,
}

impl PostService {
    /// Loads a post together with its comments.
    #[tracing::instrument(skip(self))]
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<PostDto> {
        let id = PostId::new(query.id)?;
        let post = self.post_repo.find_by_id(id).await?;
        let comments = self.comment_repo.find_by_post_id(id).await?;
        Ok(post.with_comments(comments).into())
    }
}
