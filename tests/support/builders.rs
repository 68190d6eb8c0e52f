// tests/support/builders.rs
use super::mocks::fixed_now;
use blog_core::domain::post::{Content, Post, PostId, Title};

pub struct PostBuilder {
    id: i64,
    title: String,
    content: String,
    deleted: bool,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Post".into(),
            content: "Test content".into(),
            deleted: false,
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: PostId::new(self.id).unwrap(),
            title: Title::new(self.title).unwrap(),
            content: Content::new(self.content).unwrap(),
            comments: Vec::new(),
            created_at: fixed_now(),
            updated_at: fixed_now(),
            deleted_at: self.deleted.then(fixed_now),
        }
    }
}

impl Default for PostBuilder {
    fn default() -> Self {
        Self::new()
    }
}
