//! API Module
//!
//! HTTP client for communicating with the weight backend and the blog.

pub mod client;

pub use client::*;
