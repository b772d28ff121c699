//! Transport seam
//!
//! The gateway never talks to an HTTP library directly. Native builds use
//! [`ReqwestTransport`](super::native::ReqwestTransport); the browser UI
//! supplies a fetch-based implementation. Tests plug in an in-memory one.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use super::request::Method;

/// A fully resolved outbound call
#[derive(Debug, Clone, PartialEq)]
pub struct HttpCall {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

/// Whatever came back over the wire, before any decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// 200 OK with a JSON body
    pub fn ok_json(body: &Value) -> Self {
        Self::new(200, "OK", body.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure before any response arrived
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete in time
    #[error("Request timeout")]
    Timeout,

    /// Connection refused, DNS failure, CORS rejection and the like
    #[error("Network error: {0}")]
    Network(String),

    /// The request could not be constructed
    #[error("Invalid request: {0}")]
    Build(String),
}

/// Executes HTTP calls
///
/// `?Send` because the browser implementation holds JS values across awaits.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, call: HttpCall) -> Result<RawResponse, TransportError>;

    /// Wait before a retry
    async fn pause(&self, duration: Duration);
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn execute(&self, call: HttpCall) -> Result<RawResponse, TransportError> {
        (**self).execute(call).await
    }

    async fn pause(&self, duration: Duration) {
        (**self).pause(duration).await
    }
}
