//! Weight Page State
//!
//! Owned by the weight page and provided to its subtree. Holds the current
//! user's record store, the user directory for comparisons and the table's
//! view state (filters, sort, pagination, editing).

use chrono::{DateTime, Local, NaiveDate, Utc};
use healthhub::compare::ComparePair;
use healthhub::gateway::RemoteRecord;
use healthhub::query::{sort_records, Pagination, QueryParams, Sort, SortKey, SortOrder};
use healthhub::records::{
    FieldError, FieldErrors, FormField, RecordDraft, RecordStore, UserDirectory, WeightRecord,
};
use leptos::*;

/// Id of the signed-in user
pub const CURRENT_USER: &str = "user1";

pub const MSG_DATE_LOCKED: &str = "The date of a saved record cannot be changed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightTab {
    Records,
    Compare,
}

#[derive(Clone, Copy)]
pub struct WeightState {
    pub store: RwSignal<RecordStore>,
    pub directory: RwSignal<UserDirectory>,
    pub query: RwSignal<QueryParams>,
    pub sort: RwSignal<Option<Sort>>,
    pub pagination: RwSignal<Pagination>,
    /// Record being edited; `None` while creating
    pub editing: RwSignal<Option<WeightRecord>>,
    pub modal_open: RwSignal<bool>,
    pub compare: RwSignal<ComparePair>,
    pub tab: RwSignal<WeightTab>,
    /// Records came from the server, so edits are sent there too
    pub remote: RwSignal<bool>,
}

/// Provide weight page state to the page subtree
pub fn provide_weight_state() -> WeightState {
    let directory = UserDirectory::sample();
    let store = RecordStore::with_records(CURRENT_USER, directory.records_of(CURRENT_USER).to_vec());

    let state = WeightState {
        store: create_rw_signal(store),
        directory: create_rw_signal(directory),
        query: create_rw_signal(QueryParams::default()),
        sort: create_rw_signal(None),
        pagination: create_rw_signal(Pagination::default()),
        editing: create_rw_signal(None),
        modal_open: create_rw_signal(false),
        compare: create_rw_signal(ComparePair::default()),
        tab: create_rw_signal(WeightTab::Records),
        remote: create_rw_signal(false),
    };

    provide_context(state);
    state
}

pub fn use_weight_state() -> WeightState {
    use_context::<WeightState>().expect("WeightState not found")
}

impl WeightState {
    /// Filtered and sorted records, in table order
    pub fn visible_records(&self) -> Vec<WeightRecord> {
        let query = self.query.get();
        let sort = self.sort.get();
        self.store.with(|store| table_rows(store.records(), &query, sort))
    }

    pub fn search(&self, params: QueryParams) {
        self.query.set(params);
        self.pagination.update(|p| *p = p.goto(1));
    }

    pub fn reset_search(&self) {
        self.search(QueryParams::default());
    }

    pub fn toggle_sort(&self, key: SortKey) {
        self.sort.update(|s| *s = Sort::cycle(*s, key));
    }

    pub fn open_create(&self) {
        self.editing.set(None);
        self.modal_open.set(true);
    }

    pub fn open_edit(&self, record: WeightRecord) {
        self.editing.set(Some(record));
        self.modal_open.set(true);
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
        self.editing.set(None);
    }

    /// Create or update from a validated draft; returns the notice text
    pub fn apply_draft(&self, draft: RecordDraft) -> Result<&'static str, String> {
        let result = match self.editing.get_untracked() {
            Some(record) => {
                let mut outcome = Ok("Record updated");
                self.store.update(|store| {
                    if let Err(e) = store.update(&record.id, draft) {
                        outcome = Err(e.to_string());
                    }
                });
                outcome
            }
            None => {
                self.store.update(|store| {
                    store.create(draft);
                });
                Ok("Record added")
            }
        };

        if result.is_ok() {
            self.sync_directory();
            self.close_modal();
        }
        result
    }

    /// Remove a record once `confirm` agrees
    pub fn delete(&self, id: &str, confirm: impl FnOnce(&WeightRecord) -> bool) -> bool {
        let mut removed = false;
        self.store.update(|store| {
            removed = store.delete(id, confirm).is_some();
        });
        if removed {
            self.sync_directory();
        }
        removed
    }

    /// Replace the store with records fetched from the server
    pub fn load_remote(&self, records: Vec<RemoteRecord>) {
        self.store.update(|store| store.replace_from_remote(records));
        self.remote.set(true);
        self.pagination.update(|p| *p = p.goto(1));
        self.sync_directory();
    }

    /// Server records only accept a new weight, so their date is fixed
    pub fn date_locked(&self) -> bool {
        self.remote.get() && self.editing.with(Option::is_some)
    }

    pub fn set_compare_left(&self, user_id: &str) {
        let directory = self.directory.get_untracked();
        self.compare.update(|pair| *pair = pair.clone().with_left(&directory, user_id));
    }

    pub fn set_compare_right(&self, user_id: &str) {
        let directory = self.directory.get_untracked();
        self.compare.update(|pair| *pair = pair.clone().with_right(&directory, user_id));
    }

    fn sync_directory(&self) {
        let records = self.store.with_untracked(|store| store.records().to_vec());
        self.directory.update(|dir| {
            dir.set_records(CURRENT_USER, records);
        });
    }
}

/// Reject a server-side edit that changes the date
pub fn check_remote_edit(original: &WeightRecord, draft: &RecordDraft) -> Result<(), FieldErrors> {
    if draft.date == original.date {
        Ok(())
    } else {
        Err(FieldErrors(vec![FieldError::new(FormField::Date, MSG_DATE_LOCKED)]))
    }
}

/// Records passing `query`, sorted when a sort is active
pub fn table_rows(records: &[WeightRecord], query: &QueryParams, sort: Option<Sort>) -> Vec<WeightRecord> {
    let mut rows = query.apply(records);
    if let Some(sort) = sort {
        sort_records(&mut rows, sort);
    }
    rows
}

/// One rendered page of the record table
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub rows: Vec<WeightRecord>,
    pub current: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub label: String,
    pub has_prev: bool,
    pub has_next: bool,
}

pub fn page_view(records: &[WeightRecord], pagination: Pagination) -> PageView {
    let page = pagination.slice(records);
    PageView {
        rows: page.items.to_vec(),
        current: page.current,
        page_count: page.page_count,
        page_size: page.page_size,
        label: page.range_label(),
        has_prev: page.has_prev(),
        has_next: page.has_next(),
    }
}

/// Header suffix showing the sort direction of a column
pub fn sort_indicator(sort: Option<Sort>, key: SortKey) -> &'static str {
    match sort {
        Some(Sort { key: k, order }) if k == key => match order {
            SortOrder::Ascending => " ▲",
            SortOrder::Descending => " ▼",
        },
        _ => "",
    }
}

/// `YYYY-MM-DD HH:MM` in the browser's zone
pub fn format_submitted(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Parse the value of an `<input type="date">`; empty means unset
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<WeightRecord> {
        let dir = UserDirectory::sample();
        dir.users().iter().flat_map(|u| u.records.clone()).collect()
    }

    #[test]
    fn test_table_rows_filters_then_sorts() {
        let records = sample_rows();
        let query = QueryParams::new().weight("6");
        let rows = table_rows(&records, &query, Some(Sort::descending(SortKey::Weight)));

        let kg: Vec<String> = rows.iter().map(|r| r.weight.to_string()).collect();
        assert_eq!(kg, vec!["69", "65", "64"]);
    }

    #[test]
    fn test_table_rows_unsorted_keeps_order() {
        let records = sample_rows();
        let rows = table_rows(&records, &QueryParams::default(), None);
        assert_eq!(rows, records);
    }

    #[test]
    fn test_page_view() {
        let records = sample_rows();
        let view = page_view(&records, Pagination::new(2, 3));
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.current, 2);
        assert_eq!(view.label, "4-4 of 4");
        assert!(view.has_prev);
        assert!(!view.has_next);
    }

    #[test]
    fn test_sort_indicator() {
        let sort = Some(Sort::ascending(SortKey::Date));
        assert_eq!(sort_indicator(sort, SortKey::Date), " ▲");
        assert_eq!(sort_indicator(sort, SortKey::Weight), "");
        assert_eq!(sort_indicator(None, SortKey::Date), "");
    }

    #[test]
    fn test_remote_edit_keeps_date() {
        let records = sample_rows();
        let original = &records[0];

        let same_day = RecordDraft {
            date: original.date,
            weight: healthhub::records::Weight::from_kg(63.5).unwrap(),
        };
        assert!(check_remote_edit(original, &same_day).is_ok());

        let moved = RecordDraft {
            date: original.date.succ_opt().unwrap(),
            ..same_day
        };
        let errors = check_remote_edit(original, &moved).unwrap_err();
        assert_eq!(errors.message_for(FormField::Date), Some(MSG_DATE_LOCKED));
        assert_eq!(errors.message_for(FormField::Weight), None);
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-03-05"),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("03/05/2024"), None);
    }
}
