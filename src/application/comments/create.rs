// src/application/comments/create.rs
use super::PostCommentService;
use crate::{
    application::{dto::PostCommentDto, error::ApplicationResult},
    domain::{
        comment::{CommentText, NewPostComment},
        post::PostId,
    },
};

#[derive(Debug, Clone)]
pub struct CreatePostCommentCommand {
    pub post_id: i64,
    pub text: String,
}

impl PostCommentService {
    /// The comment repository trusts the post id, so the owning post is
    /// looked up here first; a missing or deleted post yields `NotFound`.
    #[tracing::instrument(skip_all, fields(post_id = command.post_id))]
    pub async fn create_comment(
        &self,
        command: CreatePostCommentCommand,
    ) -> ApplicationResult<PostCommentDto> {
        let post_id = PostId::new(command.post_id)?;
        let text = CommentText::new(command.text)?;

        let post = self.post_repo.find_by_id(post_id).await?;
        let created = self
            .comment_repo
            .create(NewPostComment {
                post_id: post.id,
                text,
            })
            .await?;
        tracing::info!(comment_id = %created.id, "comment created");
        Ok(created.into())
    }
}
