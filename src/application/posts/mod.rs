// src/application/posts/mod.rs
mod create;
mod delete;
mod get_by_id;
mod list;
mod service;
mod update;

pub use create::CreatePostCommand;
pub use delete::DeletePostCommand;
pub use get_by_id::GetPostQuery;
pub use list::ListPostsQuery;
pub use service::PostService;
pub use update::UpdatePostCommand;
