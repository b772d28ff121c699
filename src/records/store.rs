//! In-memory record store
//!
//! Holds the current user's weight records for the lifetime of the page.
//! Records keep insertion order; `seq` is assigned at creation and never
//! reused or changed afterwards.

use chrono::{DateTime, Utc};

use super::error::{RecordError, RecordResult};
use super::form::RecordDraft;
use super::types::WeightRecord;
use crate::gateway::RemoteRecord;

/// The current user's weight records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordStore {
    user_id: String,
    records: Vec<WeightRecord>,
}

impl RecordStore {
    /// Create an empty store for a user
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            records: Vec::new(),
        }
    }

    /// Create a store seeded with existing records
    pub fn with_records(user_id: impl Into<String>, records: Vec<WeightRecord>) -> Self {
        Self {
            user_id: user_id.into(),
            records,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// All records in insertion order
    pub fn records(&self) -> &[WeightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&WeightRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Sequence number the next created record will receive
    pub fn next_seq(&self) -> u32 {
        self.records.iter().map(|r| r.seq).max().map_or(1, |max| max + 1)
    }

    /// Create a record stamped with the current time
    pub fn create(&mut self, draft: RecordDraft) -> &WeightRecord {
        self.create_at(draft, Utc::now())
    }

    /// Create a record stamped with the given time
    pub fn create_at(&mut self, draft: RecordDraft, now: DateTime<Utc>) -> &WeightRecord {
        let record = WeightRecord {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: self.user_id.clone(),
            seq: self.next_seq(),
            date: draft.date,
            weight: draft.weight,
            submitted_at: now,
            updated_at: now,
        };

        tracing::info!(
            record_id = %record.id,
            seq = record.seq,
            date = %record.date,
            weight = %record.weight,
            "Record created"
        );

        self.records.push(record);
        let last = self.records.len() - 1;
        &self.records[last]
    }

    /// Apply an edit to an existing record, refreshing `updated_at`
    pub fn update(&mut self, id: &str, draft: RecordDraft) -> RecordResult<&WeightRecord> {
        self.update_at(id, draft, Utc::now())
    }

    /// Apply an edit to an existing record at the given time
    ///
    /// `id`, `seq`, `user_id` and `submitted_at` are preserved.
    pub fn update_at(
        &mut self,
        id: &str,
        draft: RecordDraft,
        now: DateTime<Utc>,
    ) -> RecordResult<&WeightRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RecordError::NotFound(id.to_string()))?;

        record.date = draft.date;
        record.weight = draft.weight;
        record.updated_at = now;

        tracing::info!(record_id = %id, weight = %record.weight, "Record updated");
        Ok(&*record)
    }

    /// Remove a record after the user confirms
    ///
    /// `confirm` is asked only when the record exists. Returns the removed
    /// record, or `None` when it is missing or the user cancelled.
    pub fn delete<F>(&mut self, id: &str, confirm: F) -> Option<WeightRecord>
    where
        F: FnOnce(&WeightRecord) -> bool,
    {
        let index = self.records.iter().position(|r| r.id == id)?;

        if !confirm(&self.records[index]) {
            tracing::debug!(record_id = %id, "Delete cancelled");
            return None;
        }

        tracing::info!(record_id = %id, "Record deleted");
        Some(self.records.remove(index))
    }

    /// Replace the contents with records fetched from the server
    ///
    /// The server has no notion of `seq`, so it is assigned 1..n in order
    /// of submission.
    pub fn replace_from_remote(&mut self, remote: Vec<RemoteRecord>) {
        self.replace_from_remote_at(remote, 1);
    }

    /// Like [`replace_from_remote`](Self::replace_from_remote), numbering
    /// from `first_seq` so one page of a listing continues the previous one
    pub fn replace_from_remote_at(&mut self, remote: Vec<RemoteRecord>, first_seq: u32) {
        let mut remote = remote;
        remote.sort_by(|a, b| a.submitted_at.cmp(&b.submitted_at));

        self.records = remote
            .into_iter()
            .enumerate()
            .map(|(i, r)| WeightRecord {
                id: r.id,
                user_id: self.user_id.clone(),
                seq: first_seq + i as u32,
                date: r.date,
                weight: r.weight,
                submitted_at: r.submitted_at,
                updated_at: r.updated_at,
            })
            .collect();

        tracing::info!(count = self.records.len(), first_seq, "Store replaced from server");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::form::RecordForm;
    use crate::records::types::Weight;
    use chrono::NaiveDate;

    fn draft(day: u32, kg: &str) -> RecordDraft {
        RecordForm::new(NaiveDate::from_ymd_opt(2024, 3, day), kg)
            .validate()
            .unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_709_251_200 + secs, 0).unwrap()
    }

    #[test]
    fn test_seq_strictly_increasing_from_one() {
        let mut store = RecordStore::new("user1");
        for i in 0..5 {
            store.create(draft(1 + i, "70"));
        }

        let seqs: Vec<u32> = store.records().iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seq_continues_after_delete() {
        let mut store = RecordStore::new("user1");
        store.create(draft(1, "70"));
        let second = store.create(draft(2, "71")).id.clone();
        store.delete(&second, |_| true);

        assert_eq!(store.next_seq(), 2);
        store.create(draft(3, "72"));
        store.create(draft(4, "73"));
        assert_eq!(store.records().last().unwrap().seq, 3);
    }

    #[test]
    fn test_create_stamps_timestamps_and_owner() {
        let mut store = RecordStore::new("user1");
        let record = store.create_at(draft(1, "65.0"), at(0)).clone();

        assert_eq!(record.user_id, "user1");
        assert_eq!(record.submitted_at, at(0));
        assert_eq!(record.updated_at, at(0));
        assert!(!record.id.is_empty());
    }

    #[test]
    fn test_update_preserves_identity() {
        let mut store = RecordStore::new("user1");
        let original = store.create_at(draft(1, "65"), at(0)).clone();

        let updated = store
            .update_at(&original.id, draft(2, "64.5"), at(60))
            .unwrap()
            .clone();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.seq, original.seq);
        assert_eq!(updated.submitted_at, original.submitted_at);
        assert_eq!(updated.user_id, original.user_id);
        assert_eq!(updated.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(updated.weight, Weight::from_kg(64.5).unwrap());
        assert_eq!(updated.updated_at, at(60));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_missing_record() {
        let mut store = RecordStore::new("user1");
        store.create(draft(1, "65"));
        let before = store.clone();

        let err = store.update("nope", draft(2, "66")).unwrap_err();
        assert_eq!(err, RecordError::NotFound("nope".to_string()));
        assert_eq!(store, before);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut store = RecordStore::new("user1");
        let a = store.create(draft(1, "65")).id.clone();
        let b = store.create(draft(2, "66")).id.clone();
        let before = store.clone();

        assert!(store.delete(&a, |_| false).is_none());
        assert_eq!(store, before);

        let removed = store.delete(&a, |r| r.seq == 1).unwrap();
        assert_eq!(removed.id, a);
        assert_eq!(store.len(), 1);
        assert!(store.get(&b).is_some());
    }

    #[test]
    fn test_delete_missing_does_not_prompt() {
        let mut store = RecordStore::new("user1");
        store.create(draft(1, "65"));

        let mut asked = false;
        assert!(store
            .delete("missing", |_| {
                asked = true;
                true
            })
            .is_none());
        assert!(!asked);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_from_remote_assigns_seq_by_submission() {
        let json = r#"[
            {"id": 7, "date": "2024-03-05", "weight": "64.0",
             "submitted_at": "2024-03-05T08:00:00Z", "updated_at": "2024-03-05T08:00:00Z"},
            {"id": 3, "date": "2024-03-01", "weight": "65.0",
             "submitted_at": "2024-03-01T08:00:00Z", "updated_at": "2024-03-01T08:00:00Z"}
        ]"#;
        let remote: Vec<RemoteRecord> = serde_json::from_str(json).unwrap();

        let mut store = RecordStore::new("user1");
        store.create(draft(9, "80"));
        store.replace_from_remote(remote);

        let ids: Vec<(&str, u32)> = store
            .records()
            .iter()
            .map(|r| (r.id.as_str(), r.seq))
            .collect();
        assert_eq!(ids, vec![("3", 1), ("7", 2)]);
        assert!(store.records().iter().all(|r| r.user_id == "user1"));
    }

    #[test]
    fn test_replace_from_remote_at_continues_numbering() {
        let json = r#"[
            {"id": 21, "date": "2024-04-02", "weight": 63.2,
             "submitted_at": "2024-04-02T08:00:00Z", "updated_at": "2024-04-02T08:00:00Z"},
            {"id": 22, "date": "2024-04-03", "weight": 63.0,
             "submitted_at": "2024-04-03T08:00:00Z", "updated_at": "2024-04-03T08:00:00Z"}
        ]"#;
        let remote: Vec<RemoteRecord> = serde_json::from_str(json).unwrap();

        let mut store = RecordStore::new("user1");
        store.replace_from_remote_at(remote, 21);

        let seqs: Vec<u32> = store.records().iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![21, 22]);
    }
}
