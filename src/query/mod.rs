//! Record Queries
//!
//! Derived views over the record store:
//!
//! - **filter**: Narrow records by id, date, weight or submission day
//! - **sort**: Column sorting for the record table
//! - **page**: Slice results into pages
//!
//! # Pipeline
//!
//! ```text
//! RecordStore ─▶ QueryParams::apply ─▶ sort_records ─▶ Pagination::slice ─▶ table
//! ```
//!
//! # Example
//!
//! ```rust
//! use healthhub::query::{Pagination, QueryParams};
//! use healthhub::records::UserDirectory;
//!
//! let directory = UserDirectory::sample();
//! let records = directory.records_of("user2");
//!
//! let filtered = QueryParams::new()
//!     .date(chrono::NaiveDate::from_ymd_opt(2024, 3, 5))
//!     .apply(records);
//! let page = Pagination::default().slice(&filtered);
//! assert_eq!(page.total, 1);
//! ```

pub mod filter;
pub mod page;
pub mod sort;

pub use filter::{
    filter_records, matches_date, matches_id, matches_submitted_on, matches_weight, QueryParams,
};
pub use page::{Page, Pagination, PAGE_SIZE_OPTIONS};
pub use sort::{sort_records, Sort, SortKey, SortOrder};
