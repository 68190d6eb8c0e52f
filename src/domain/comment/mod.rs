pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPostComment, PostComment};
pub use repository::PostCommentRepository;
pub use value_objects::{CommentId, CommentText};
