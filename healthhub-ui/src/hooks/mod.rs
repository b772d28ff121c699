//! Data Hooks
//!
//! Reactive wrappers around remote data sources.

pub mod blog;

pub use blog::{use_blog_posts, BlogPosts};
