//! Column sorting for the record table

use crate::records::WeightRecord;

/// Sortable record columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Date,
    Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Active column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sort {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Descending,
        }
    }

    /// Next state when a column header is clicked
    ///
    /// Cycles unsorted → ascending → descending → unsorted per column;
    /// clicking another column starts it ascending.
    pub fn cycle(current: Option<Sort>, key: SortKey) -> Option<Sort> {
        match current {
            Some(sort) if sort.key == key => match sort.order {
                SortOrder::Ascending => Some(Sort::descending(key)),
                SortOrder::Descending => None,
            },
            _ => Some(Sort::ascending(key)),
        }
    }
}

/// Sort records in place; ties keep their relative order
pub fn sort_records(records: &mut [WeightRecord], sort: Sort) {
    records.sort_by(|a, b| {
        let ordering = match sort.key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Weight => a.weight.cmp(&b.weight),
        };
        match sort.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::UserDirectory;

    #[test]
    fn test_cycle() {
        let s = Sort::cycle(None, SortKey::Date);
        assert_eq!(s, Some(Sort::ascending(SortKey::Date)));

        let s = Sort::cycle(s, SortKey::Date);
        assert_eq!(s, Some(Sort::descending(SortKey::Date)));

        assert_eq!(Sort::cycle(s, SortKey::Date), None);
        assert_eq!(
            Sort::cycle(s, SortKey::Weight),
            Some(Sort::ascending(SortKey::Weight))
        );
    }

    #[test]
    fn test_order_toggled() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn test_sort_by_weight_and_date() {
        let dir = UserDirectory::sample();
        let mut records: Vec<WeightRecord> = dir
            .users()
            .iter()
            .flat_map(|u| u.records.clone())
            .collect();

        sort_records(&mut records, Sort::descending(SortKey::Weight));
        let kg: Vec<String> = records.iter().map(|r| r.weight.to_string()).collect();
        assert_eq!(kg, vec!["70", "69", "65", "64"]);

        sort_records(&mut records, Sort::ascending(SortKey::Date));
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let dir = UserDirectory::sample();
        let mut records = dir.records_of("user2").to_vec();
        let mut same_day = records[0].clone();
        same_day.id = "1b".to_string();
        records.push(same_day);

        sort_records(&mut records, Sort::ascending(SortKey::Date));
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "1b", "2"]);
    }
}
