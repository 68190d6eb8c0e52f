// src/application/posts/create.rs
use super::PostService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{Content, NewPost, Title},
};

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
}

impl PostService {
    #[tracing::instrument(skip_all, fields(title = %command.title))]
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = Title::new(command.title)?;
        let content = Content::new(command.content)?;

        let created = self.post_repo.create(NewPost { title, content }).await?;
        tracing::info!(post_id = %created.id, "post created");
        Ok(created.into())
    }
}
