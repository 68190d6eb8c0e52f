use crate::domain::comment::value_objects::{CommentId, CommentText};
use crate::domain::post::PostId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct PostComment {
    pub id: CommentId,
    pub post_id: PostId,
    pub text: CommentText,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewPostComment {
    pub post_id: PostId,
    pub text: CommentText,
}
