// src/domain/post/entity.rs
use crate::domain::comment::PostComment;
use crate::domain::post::value_objects::{Content, PostId, Title};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: Title,
    pub content: Content,
    /// Owned comments in creation order. Only populated by single-post reads.
    pub comments: Vec<PostComment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn with_comments(mut self, comments: Vec<PostComment>) -> Self {
        self.comments = comments;
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: Title,
    pub content: Content,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<Title>,
    pub content: Option<Content>,
}

impl PostUpdate {
    pub fn new(id: PostId) -> Self {
        Self {
            id,
            title: None,
            content: None,
        }
    }

    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = Some(content);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
