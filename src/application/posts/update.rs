use super::PostService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{Content, PostId, PostUpdate, Title},
};

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostService {
    /// Applies a partial update; only supplied fields are validated and written.
    #[tracing::instrument(skip_all, fields(post_id = command.id))]
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let UpdatePostCommand { id, title, content } = command;
        let mut update = PostUpdate::new(PostId::new(id)?);

        if let Some(title) = title {
            update = update.with_title(Title::new(title)?);
        }
        if let Some(content) = content {
            update = update.with_content(Content::new(content)?);
        }
        if update.is_empty() {
            return Err(ApplicationError::validation(
                "update requires a title or content",
            ));
        }

        let updated = self.post_repo.update(update).await?;
        Ok(updated.into())
    }
}
