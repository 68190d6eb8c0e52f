// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{comments::PostCommentService, posts::PostService},
    domain::{comment::PostCommentRepository, post::PostRepository},
};

pub struct ApplicationServices {
    pub posts: Arc<PostService>,
    pub comments: Arc<PostCommentService>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn PostCommentRepository>,
    ) -> Self {
        let posts = Arc::new(PostService::new(
            Arc::clone(&post_repo),
            Arc::clone(&comment_repo),
        ));
        let comments = Arc::new(PostCommentService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&post_repo),
        ));

        Self { posts, comments }
    }
}
