pub mod pagination;
pub mod posts;

pub use pagination::Paginated;
pub use posts::{PostCommentDto, PostDto};
