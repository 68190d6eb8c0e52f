// src/application/posts/service.rs
use std::sync::Arc;

use crate::domain::{comment::PostCommentRepository, post::PostRepository};

pub struct PostService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) comment_repo: Arc<dyn PostCommentRepository>,
}

impl PostService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn PostCommentRepository>,
    ) -> Self {
        Self {
            post_repo,
            comment_repo,
        }
    }
}
