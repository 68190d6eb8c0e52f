// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod post_repos;
pub mod time;

pub use post_repos::{MemoryCommentRepo, MemoryPostRepo, MemoryStore};
pub use time::fixed_now;
