//! API Gateway
//!
//! Thin REST layer between the UI (or CLI) and the weight backend:
//!
//! - **request**: Request description and cache-busting
//! - **transport**: Pluggable HTTP execution (`reqwest` natively, fetch in the browser)
//! - **envelope**: `{code, data, msg}` unwrapping
//! - **report**: Routing failures to a permission modal or a notification
//! - **client**: Typed record endpoints
//!
//! # Flow
//!
//! ```text
//! ApiGateway::call
//!   │  + _t timestamp, default headers
//!   ▼
//! Transport::execute ──Err──▶ GatewayError::Transport ─┐
//!   │                                                  │
//!   ▼ non-2xx ──▶ GatewayError::Http (body msg) ───────┤
//! envelope::decode                                     │
//!   │ code != 0 ──▶ GatewayError::Business ────────────┤
//!   ▼                                                  ▼
//!  Ok(data)                                  Reporter::report + Err
//! ```

pub mod client;
pub mod dto;
pub mod envelope;
pub mod error;
#[cfg(feature = "native")]
pub mod native;
pub mod report;
pub mod request;
pub mod transport;

pub use client::{ApiGateway, Confirm, ConfirmPrompt, DeleteOutcome};
pub use dto::{RecordPage, RemoteRecord};
pub use error::{ErrorKind, GatewayError, GatewayResult};
#[cfg(feature = "native")]
pub use native::ReqwestTransport;
pub use report::{ErrorReport, Reporter, TracingReporter};
pub use request::{ApiRequest, Method};
pub use transport::{HttpCall, RawResponse, Transport, TransportError};
