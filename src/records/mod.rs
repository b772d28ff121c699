//! Weight Records
//!
//! This module provides the record-keeping side of the weight tracker:
//!
//! - **types**: Core data structures (WeightRecord, Weight, UserData)
//! - **form**: Raw form input and its validation into a draft
//! - **store**: In-memory store for the current user's records
//! - **directory**: All known users and their records, for comparison
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//! RecordForm ──validate──▶ RecordDraft ──create/update──▶ RecordStore
//!                                                      ──delete (confirmed)──▶ removed
//! ```

pub mod directory;
pub mod error;
pub mod form;
pub mod store;
pub mod types;

pub use directory::UserDirectory;
pub use error::{RecordError, RecordResult};
pub use form::{FieldError, FieldErrors, FormField, RecordDraft, RecordForm};
pub use store::RecordStore;
pub use types::{UserData, Weight, WeightRecord};
