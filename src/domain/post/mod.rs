pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::PostRepository;
pub use value_objects::{Content, PostId, Title};
