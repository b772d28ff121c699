//! Record filtering
//!
//! Each filterable field has its own predicate. A record passes a
//! [`QueryParams`] when every field that is set matches (logical AND).
//! Day fields compare calendar days; text fields use case-sensitive
//! substring containment on the displayed value.

use chrono::NaiveDate;

use crate::records::WeightRecord;

/// Record id contains `needle`
pub fn matches_id(record: &WeightRecord, needle: &str) -> bool {
    record.id.contains(needle)
}

/// Record was taken on `day`
pub fn matches_date(record: &WeightRecord, day: NaiveDate) -> bool {
    record.date == day
}

/// Displayed weight (`65`, `64.5`) contains `needle`
pub fn matches_weight(record: &WeightRecord, needle: &str) -> bool {
    record.weight.to_string().contains(needle)
}

/// Record was submitted on `day` (UTC)
pub fn matches_submitted_on(record: &WeightRecord, day: NaiveDate) -> bool {
    record.submitted_at.date_naive() == day
}

/// Active filters of the record query form
///
/// Unset fields (and empty text) do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub id: Option<String>,
    pub date: Option<NaiveDate>,
    pub weight: Option<String>,
    pub submitted_on: Option<NaiveDate>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, needle: impl Into<String>) -> Self {
        self.id = non_empty(needle.into());
        self
    }

    pub fn date(mut self, day: Option<NaiveDate>) -> Self {
        self.date = day;
        self
    }

    pub fn weight(mut self, needle: impl Into<String>) -> Self {
        self.weight = non_empty(needle.into());
        self
    }

    pub fn submitted_on(mut self, day: Option<NaiveDate>) -> Self {
        self.submitted_on = day;
        self
    }

    /// True when no filter is active
    pub fn is_empty(&self) -> bool {
        self.active_id().is_none()
            && self.date.is_none()
            && self.active_weight().is_none()
            && self.submitted_on.is_none()
    }

    /// Check a record against every active filter
    pub fn matches(&self, record: &WeightRecord) -> bool {
        if let Some(needle) = self.active_id() {
            if !matches_id(record, needle) {
                return false;
            }
        }

        if let Some(day) = self.date {
            if !matches_date(record, day) {
                return false;
            }
        }

        if let Some(needle) = self.active_weight() {
            if !matches_weight(record, needle) {
                return false;
            }
        }

        if let Some(day) = self.submitted_on {
            if !matches_submitted_on(record, day) {
                return false;
            }
        }

        true
    }

    /// Filter records, keeping their order
    pub fn apply(&self, records: &[WeightRecord]) -> Vec<WeightRecord> {
        filter_records(records, self)
    }

    fn active_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }

    fn active_weight(&self) -> Option<&str> {
        self.weight.as_deref().filter(|s| !s.is_empty())
    }
}

/// Records passing `params`, in their original order
pub fn filter_records(records: &[WeightRecord], params: &QueryParams) -> Vec<WeightRecord> {
    if params.is_empty() {
        return records.to_vec();
    }
    records.iter().filter(|r| params.matches(r)).cloned().collect()
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
