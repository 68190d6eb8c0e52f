use super::PostService;
use crate::{application::error::ApplicationResult, domain::post::PostId};

#[derive(Debug, Clone, Copy)]
pub struct DeletePostCommand {
    pub id: i64,
}

impl PostService {
    #[tracing::instrument(skip(self))]
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = PostId::new(command.id)?;
        self.post_repo.delete(id).await?;
        tracing::info!(post_id = %id, "post deleted");
        Ok(())
    }
}
