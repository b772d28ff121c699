//! Blog feed
//!
//! `GET /api/blog` returns a bare JSON array of posts (no envelope). The
//! client derives a short plain-text summary from each post's markdown and
//! retries a failed listing a bounded number of times.

use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gateway::{ApiRequest, HttpCall, Transport, TransportError};

/// Listing endpoint
pub const BLOG_PATH: &str = "/api/blog";

/// Characters of content kept in a summary
pub const SUMMARY_CHARS: usize = 100;

/// Delay unit between attempts; attempt `n` waits `n` units
pub const RETRY_BACKOFF: Duration = Duration::from_millis(500);

static HEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#{1,6}\s?").expect("heading pattern is valid"));

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(deserialize_with = "crate::timefmt::deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(deserialize_with = "crate::timefmt::deserialize_id")]
    pub author_id: String,
    #[serde(deserialize_with = "crate::timefmt::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "crate::timefmt::deserialize_option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Derived on the client, see [`summarize`]
    #[serde(default)]
    pub summary: Option<String>,
}

impl BlogPost {
    /// Fill in `summary` from `content`
    pub fn with_summary(mut self) -> Self {
        self.summary = Some(summarize(&self.content));
        self
    }
}

/// Plain-text preview: first 100 characters, heading markers removed
pub fn summarize(content: &str) -> String {
    let head: String = content.chars().take(SUMMARY_CHARS).collect();
    format!("{}...", HEADING_MARKER.replace_all(&head, ""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogOrder {
    #[default]
    CreatedAt,
    Views,
}

impl BlogOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogOrder::CreatedAt => "created_at",
            BlogOrder::Views => "views",
        }
    }
}

impl std::str::FromStr for BlogOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(BlogOrder::CreatedAt),
            "views" => Ok(BlogOrder::Views),
            other => Err(format!("unknown blog order: {}", other)),
        }
    }
}

/// Listing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogQuery {
    pub limit: u32,
    pub offset: u32,
    pub order_by: BlogOrder,
    pub ascending: bool,
}

impl Default for BlogQuery {
    fn default() -> Self {
        Self {
            limit: 6,
            offset: 0,
            order_by: BlogOrder::CreatedAt,
            ascending: false,
        }
    }
}

impl BlogQuery {
    pub fn request(&self) -> ApiRequest {
        ApiRequest::get(BLOG_PATH)
            .query("limit", self.limit)
            .query("offset", self.offset)
            .query("order_by", self.order_by.as_str())
            .query("ascending", self.ascending)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlogError {
    #[error("Failed to fetch blog posts (HTTP {0})")]
    Http(u16),

    #[error("Failed to fetch blog posts: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid blog listing: {0}")]
    Decode(String),
}

/// Fetch a listing, retrying up to `retries` more times on failure
pub async fn fetch_blog_posts<T: Transport + ?Sized>(
    transport: &T,
    base_url: &str,
    query: &BlogQuery,
    retries: u32,
) -> Result<Vec<BlogPost>, BlogError> {
    let mut attempt = 0;

    loop {
        match fetch_once(transport, base_url, query).await {
            Ok(posts) => return Ok(posts),
            Err(e) if attempt < retries => {
                attempt += 1;
                tracing::warn!(attempt, error = %e, "Blog fetch failed, retrying");
                transport.pause(RETRY_BACKOFF * attempt).await;
            }
            Err(e) => {
                tracing::warn!(attempts = attempt + 1, error = %e, "Blog fetch failed");
                return Err(e);
            }
        }
    }
}

async fn fetch_once<T: Transport + ?Sized>(
    transport: &T,
    base_url: &str,
    query: &BlogQuery,
) -> Result<Vec<BlogPost>, BlogError> {
    let call = HttpCall {
        method: crate::gateway::Method::Get,
        url: query.request().url(base_url),
        body: None,
        headers: Vec::new(),
    };

    let response = transport.execute(call).await?;
    if !response.is_success() {
        return Err(BlogError::Http(response.status));
    }

    let posts: Vec<BlogPost> =
        serde_json::from_slice(&response.body).map_err(|e| BlogError::Decode(e.to_string()))?;
    Ok(posts.into_iter().map(BlogPost::with_summary).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::transport::mock::MockTransport;
    use crate::gateway::RawResponse;
    use serde_json::json;

    fn posts_json() -> serde_json::Value {
        json!([{
            "id": 1,
            "title": "Sleep and weight",
            "content": "## Why sleep matters\nShort nights raise appetite.",
            "author_id": "a1",
            "created_at": "2024-03-05T10:00:00+08:00",
            "views": 12
        }])
    }

    #[test]
    fn test_summarize_strips_headings() {
        assert_eq!(summarize("# Title\nBody"), "Title\nBody...");
        assert_eq!(summarize("###### Deep"), "Deep...");
        assert_eq!(summarize("C# tips"), "Ctips...");
    }

    #[test]
    fn test_summarize_truncates_before_stripping() {
        let content = format!("## {}", "x".repeat(200));
        let summary = summarize(&content);
        assert_eq!(summary.chars().count(), 97 + 3);
        assert!(summary.ends_with("x..."));
    }

    #[test]
    fn test_summarize_counts_chars_not_bytes() {
        let content = "体重".repeat(80);
        assert_eq!(summarize(&content).chars().count(), 103);
    }

    #[test]
    fn test_default_query() {
        let url = BlogQuery::default().request().url("http://h");
        assert_eq!(
            url,
            "http://h/api/blog?limit=6&offset=0&order_by=created_at&ascending=false"
        );
    }

    #[tokio::test]
    async fn test_fetch_derives_summary_and_utc() {
        let transport = MockTransport::new().respond_json(posts_json());

        let posts = fetch_blog_posts(&transport, "http://h", &BlogQuery::default(), 2)
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "1");
        assert_eq!(
            posts[0].summary.as_deref(),
            Some("Why sleep matters\nShort nights raise appetite....")
        );
        assert_eq!(posts[0].created_at.to_rfc3339(), "2024-03-05T02:00:00+00:00");
    }

    #[tokio::test]
    async fn test_fetch_retries_then_succeeds() {
        let transport = MockTransport::new()
            .respond(Err(TransportError::Timeout))
            .respond(Ok(RawResponse::new(500, "Internal Server Error", Vec::new())))
            .respond_json(posts_json());

        let posts = fetch_blog_posts(&transport, "http://h", &BlogQuery::default(), 2)
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(transport.call_count(), 3);
        assert_eq!(
            *transport.pauses.borrow(),
            vec![Duration::from_millis(500), Duration::from_millis(1000)]
        );
    }

    #[tokio::test]
    async fn test_fetch_gives_up_after_retries() {
        let transport = MockTransport::new()
            .respond(Ok(RawResponse::new(503, "Service Unavailable", Vec::new())))
            .respond(Ok(RawResponse::new(503, "Service Unavailable", Vec::new())))
            .respond(Ok(RawResponse::new(503, "Service Unavailable", Vec::new())))
            .respond_json(posts_json());

        let err = fetch_blog_posts(&transport, "http://h", &BlogQuery::default(), 2)
            .await
            .unwrap_err();
        assert_eq!(err, BlogError::Http(503));
        assert_eq!(transport.call_count(), 3);
    }
}
