use std::sync::Arc;

use crate::domain::{comment::PostCommentRepository, post::PostRepository};

pub struct PostCommentService {
    pub(super) comment_repo: Arc<dyn PostCommentRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
}

impl PostCommentService {
    pub fn new(
        comment_repo: Arc<dyn PostCommentRepository>,
        post_repo: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            comment_repo,
            post_repo,
        }
    }
}
