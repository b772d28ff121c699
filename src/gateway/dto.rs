//! Wire types of the weight endpoints

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::records::{RecordDraft, Weight};

/// A record as the server returns it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteRecord {
    #[serde(deserialize_with = "crate::timefmt::deserialize_id")]
    pub id: String,
    pub date: NaiveDate,
    pub weight: Weight,
    #[serde(alias = "submittedAt", deserialize_with = "crate::timefmt::deserialize")]
    pub submitted_at: DateTime<Utc>,
    #[serde(alias = "updatedAt", deserialize_with = "crate::timefmt::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// `data` of the record listing
///
/// Rows that do not decode (e.g. a stored weight outside the accepted
/// range) are dropped and counted in `skipped`; the rest of the page
/// still loads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawRecordPage")]
pub struct RecordPage {
    pub list: Vec<RemoteRecord>,
    pub total: u64,
    pub skipped: usize,
}

impl RecordPage {
    /// Rows the server sent for this page, decodable or not
    pub fn received(&self) -> usize {
        self.list.len() + self.skipped
    }
}

#[derive(Deserialize)]
struct RawRecordPage {
    #[serde(default)]
    list: Vec<Value>,
    #[serde(default)]
    total: u64,
}

impl From<RawRecordPage> for RecordPage {
    fn from(raw: RawRecordPage) -> Self {
        let mut list = Vec::with_capacity(raw.list.len());
        let mut skipped = 0;

        for row in raw.list {
            match serde_json::from_value::<RemoteRecord>(row) {
                Ok(record) => list.push(record),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(error = %e, "Skipping undecodable record row");
                }
            }
        }

        Self {
            list,
            total: raw.total,
            skipped,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateRecordRequest {
    pub date: NaiveDate,
    pub weight: f64,
}

impl From<&RecordDraft> for CreateRecordRequest {
    fn from(draft: &RecordDraft) -> Self {
        Self {
            date: draft.date,
            weight: draft.weight.kg(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateRecordRequest {
    pub update_id: String,
    /// One fraction digit, e.g. `"64.5"`
    pub new_weight: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteRecordRequest {
    pub del_id: String,
}
