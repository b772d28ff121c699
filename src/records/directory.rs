//! User directory
//!
//! All users known to the page together with their records. The comparison
//! view reads from here; the current user's entry is refreshed from the
//! record store whenever it changes.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use super::types::{UserData, Weight, WeightRecord};

/// Ordered collection of users and their records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserDirectory {
    users: Vec<UserData>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserData>) -> Self {
        Self { users }
    }

    /// The built-in roster: the current user plus two sample users
    pub fn sample() -> Self {
        Self::new(vec![
            UserData::new("user1", "Me"),
            UserData::new("user2", "User A").with_records(vec![
                sample_record("1", "user2", 1, (2024, 3, 1), 65.0),
                sample_record("2", "user2", 2, (2024, 3, 5), 64.0),
            ]),
            UserData::new("user3", "User B").with_records(vec![
                sample_record("3", "user3", 1, (2024, 3, 2), 70.0),
                sample_record("4", "user3", 2, (2024, 3, 6), 69.0),
            ]),
        ])
    }

    pub fn users(&self) -> &[UserData] {
        &self.users
    }

    pub fn get(&self, user_id: &str) -> Option<&UserData> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    pub fn username(&self, user_id: &str) -> Option<&str> {
        self.get(user_id).map(|u| u.username.as_str())
    }

    /// Records of a user; unknown users have none
    pub fn records_of(&self, user_id: &str) -> &[WeightRecord] {
        self.get(user_id).map(|u| u.records.as_slice()).unwrap_or(&[])
    }

    /// Users other than `exclude`, in directory order
    pub fn others<'a>(&'a self, exclude: &'a str) -> impl Iterator<Item = &'a UserData> + 'a {
        self.users.iter().filter(move |u| u.user_id != exclude)
    }

    /// Replace a user's records, returning false if the user is unknown
    pub fn set_records(&mut self, user_id: &str, records: Vec<WeightRecord>) -> bool {
        match self.users.iter_mut().find(|u| u.user_id == user_id) {
            Some(user) => {
                user.records = records;
                true
            }
            None => false,
        }
    }
}

fn sample_record(
    id: &str,
    user_id: &str,
    seq: u32,
    (year, month, day): (i32, u32, u32),
    kg: f64,
) -> WeightRecord {
    let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date");
    let stamp = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));

    WeightRecord {
        id: id.to_string(),
        user_id: user_id.to_string(),
        seq,
        date,
        weight: Weight::from_kg(kg).expect("sample weight in range"),
        submitted_at: stamp,
        updated_at: stamp,
    }
}
