// src/presentation/http/controllers/mod.rs
pub mod comments;
pub mod posts;
