// src/application/comments/mod.rs
mod create;
mod get_by_id;
mod list;
mod service;

pub use create::CreatePostCommentCommand;
pub use get_by_id::GetPostCommentQuery;
pub use list::ListPostCommentsQuery;
pub use service::PostCommentService;
