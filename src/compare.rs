//! Side-by-side comparison of two users' weight histories
//!
//! Rows are the ascending union of record dates from both users. A user with
//! no record on a given day shows [`PLACEHOLDER`].

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::query::SortOrder;
use crate::records::{UserDirectory, Weight, WeightRecord};

/// Cell text for a day without a record
pub const PLACEHOLDER: &str = "-";

/// One date-aligned comparison row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonItem {
    pub date: NaiveDate,
    pub user1: String,
    pub user2: String,
}

/// Compare two record sets by calendar day
pub fn compare_records(left: &[WeightRecord], right: &[WeightRecord]) -> Vec<ComparisonItem> {
    let left_by_day = by_day(left);
    let right_by_day = by_day(right);

    let dates: BTreeSet<NaiveDate> = left_by_day
        .keys()
        .chain(right_by_day.keys())
        .copied()
        .collect();

    dates
        .into_iter()
        .map(|date| ComparisonItem {
            date,
            user1: cell(left_by_day.get(&date)),
            user2: cell(right_by_day.get(&date)),
        })
        .collect()
}

/// Order comparison rows by date
pub fn sort_by_date(rows: &mut [ComparisonItem], order: SortOrder) {
    match order {
        SortOrder::Ascending => rows.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Descending => rows.sort_by(|a, b| b.date.cmp(&a.date)),
    }
}

/// Compare two users from the directory; unknown ids count as empty
pub fn build_comparison(directory: &UserDirectory, user1: &str, user2: &str) -> Vec<ComparisonItem> {
    compare_records(directory.records_of(user1), directory.records_of(user2))
}

// First record of a day wins
fn by_day(records: &[WeightRecord]) -> BTreeMap<NaiveDate, Weight> {
    let mut map = BTreeMap::new();
    for record in records {
        map.entry(record.date).or_insert(record.weight);
    }
    map
}

fn cell(weight: Option<&Weight>) -> String {
    weight
        .map(|w| w.one_decimal())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// The two users selected for comparison
///
/// The two sides never name the same user: picking the other side's user
/// moves that side to the first remaining user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparePair {
    pub left: String,
    pub right: String,
}

impl Default for ComparePair {
    fn default() -> Self {
        Self {
            left: "user1".to_string(),
            right: "user2".to_string(),
        }
    }
}

impl ComparePair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn with_left(mut self, directory: &UserDirectory, user_id: &str) -> Self {
        self.left = user_id.to_string();
        if self.right == self.left {
            if let Some(other) = directory.others(user_id).next() {
                self.right = other.user_id.clone();
            }
        }
        self
    }

    pub fn with_right(mut self, directory: &UserDirectory, user_id: &str) -> Self {
        self.right = user_id.to_string();
        if self.left == self.right {
            if let Some(other) = directory.others(user_id).next() {
                self.left = other.user_id.clone();
            }
        }
        self
    }

    /// Swap the columns
    pub fn swapped(self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    pub fn rows(&self, directory: &UserDirectory) -> Vec<ComparisonItem> {
        build_comparison(directory, &self.left, &self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_rows_are_date_union() {
        let dir = UserDirectory::sample();
        let rows = build_comparison(&dir, "user2", "user3");

        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(1), day(2), day(5), day(6)]);

        assert_eq!(rows[0].user1, "65.0");
        assert_eq!(rows[0].user2, PLACEHOLDER);
        assert_eq!(rows[1].user1, PLACEHOLDER);
        assert_eq!(rows[1].user2, "70.0");
        assert_eq!(rows[3].user2, "69.0");
    }

    #[test]
    fn test_sort_by_date() {
        let dir = UserDirectory::sample();
        let mut rows = build_comparison(&dir, "user2", "user3");

        sort_by_date(&mut rows, SortOrder::Descending);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(6), day(5), day(2), day(1)]);
        assert_eq!(rows[0].user2, "69.0");
        assert_eq!(rows[3].user1, "65.0");

        sort_by_date(&mut rows, SortOrder::Descending.toggled());
        assert_eq!(rows, build_comparison(&dir, "user2", "user3"));
    }

    #[test]
    fn test_swap_swaps_columns_only() {
        let dir = UserDirectory::sample();
        let ab = build_comparison(&dir, "user2", "user3");
        let ba = build_comparison(&dir, "user3", "user2");

        assert_eq!(ab.len(), ba.len());
        for (x, y) in ab.iter().zip(&ba) {
            assert_eq!(x.date, y.date);
            assert_eq!(x.user1, y.user2);
            assert_eq!(x.user2, y.user1);
        }
    }

    #[test]
    fn test_unknown_and_empty_users() {
        let dir = UserDirectory::sample();
        assert!(build_comparison(&dir, "user1", "ghost").is_empty());

        let rows = build_comparison(&dir, "ghost", "user2");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.user1 == PLACEHOLDER));
    }

    #[test]
    fn test_first_record_of_day_wins() {
        let dir = UserDirectory::sample();
        let mut records = dir.records_of("user2").to_vec();
        let mut dup = records[0].clone();
        dup.weight = Weight::from_kg(99.0).unwrap();
        records.push(dup);

        let rows = compare_records(&records, &[]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].user1, "65.0");
    }

    #[test]
    fn test_pair_never_repeats_user() {
        let dir = UserDirectory::sample();
        let pair = ComparePair::default().with_left(&dir, "user2");
        assert_eq!(pair.left, "user2");
        assert_eq!(pair.right, "user1");

        let pair = pair.with_right(&dir, "user2");
        assert_eq!(pair.right, "user2");
        assert_eq!(pair.left, "user1");

        let pair = ComparePair::new("user2", "user3").swapped();
        assert_eq!(pair, ComparePair::new("user3", "user2"));
    }
}
