//! # HealthHub
//!
//! Core of the HealthHub health-tracking application: weight records,
//! filtering, pagination, two-user comparison, the REST gateway and the
//! blog feed. The same crate backs the Leptos web UI (`healthhub-ui`) and
//! the `healthhub` command-line client.
//!
//! ## Modules
//!
//! - [`records`]: Weight records, validation and the in-memory record store
//! - [`query`]: Record filtering, sorting and pagination
//! - [`compare`]: Date-aligned comparison of two users' records
//! - [`gateway`]: Envelope-decoding REST client over a pluggable transport
//! - [`blog`]: Blog listing queries and summaries
//! - [`config`]: TOML/env configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use healthhub::records::{RecordForm, RecordStore};
//! use healthhub::query::QueryParams;
//!
//! let mut store = RecordStore::new("user1");
//! let draft = RecordForm::new(chrono::NaiveDate::from_ymd_opt(2024, 3, 5), "64.5")
//!     .validate()
//!     .unwrap();
//! store.create(draft);
//!
//! let params = QueryParams::new().weight("64");
//! assert_eq!(params.apply(store.records()).len(), 1);
//! ```

pub mod blog;
pub mod compare;
pub mod config;
pub mod gateway;
pub mod query;
pub mod records;
pub mod timefmt;

pub use records::{
    FieldError, FieldErrors, FormField, RecordDraft, RecordError, RecordForm, RecordStore,
    UserData, UserDirectory, Weight, WeightRecord,
};

pub use query::{Page, Pagination, QueryParams, Sort, SortKey, SortOrder};

pub use compare::{build_comparison, sort_by_date, ComparePair, ComparisonItem};

pub use gateway::{
    ApiGateway, ApiRequest, Confirm, ConfirmPrompt, DeleteOutcome, ErrorKind, ErrorReport,
    GatewayError, Method, RawResponse, RecordPage, RemoteRecord, Reporter, Transport,
    TransportError,
};

pub use blog::{BlogError, BlogOrder, BlogPost, BlogQuery};

pub use config::{ApiConfig, BlogConfig, Config, ConfigError, EndpointsConfig, LoggingConfig};
