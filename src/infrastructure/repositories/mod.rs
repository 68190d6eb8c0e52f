// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_comment;
mod postgres_post;

pub use error::{map_sqlx, map_sqlx_for_title};
pub use postgres_comment::PostgresPostCommentRepository;
pub use postgres_post::PostgresPostRepository;
