use super::PostService;
use crate::{
    application::{
        dto::{Paginated, PostDto},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};

#[derive(Debug, Clone, Copy)]
pub struct ListPostsQuery {
    pub page: i64,
    pub per_page: i64,
}

impl PostService {
    #[tracing::instrument(skip(self))]
    pub async fn list_posts(
        &self,
        query: ListPostsQuery,
    ) -> ApplicationResult<Paginated<PostDto>> {
        let request = PageRequest::new(query.page, query.per_page)?;
        let (posts, total) = self.post_repo.paginate(request).await?;

        Ok(Paginated::new(posts, request, total).map(PostDto::from))
    }
}
