//! Core data types for weight tracking
//!
//! - `Weight`: a body weight in kilograms with one fraction digit
//! - `WeightRecord`: a single dated weight entry
//! - `UserData`: a user and their records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Body weight in kilograms, kept as whole tenths
///
/// Always within [`Weight::MIN_KG`, `Weight::MAX_KG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    /// Lowest accepted weight
    pub const MIN_KG: f64 = 20.0;
    /// Highest accepted weight
    pub const MAX_KG: f64 = 300.0;

    /// Create a weight from kilograms, rounding to one fraction digit
    ///
    /// Returns `None` for non-finite or out-of-range values.
    pub fn from_kg(kg: f64) -> Option<Self> {
        if !kg.is_finite() || !(Self::MIN_KG..=Self::MAX_KG).contains(&kg) {
            return None;
        }
        Some(Self((kg * 10.0).round() as u16))
    }

    /// Weight in kilograms
    pub fn kg(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Weight in tenths of a kilogram
    pub fn tenths(self) -> u16 {
        self.0
    }

    /// Always one fraction digit: `65.0`, `64.5`
    pub fn one_decimal(self) -> String {
        format!("{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// Shortest form: `65` for 65.0, `64.5` for 64.5
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.kg())
    }
}

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Decimal fields arrive as strings from the backend
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawWeight {
            Number(f64),
            Text(String),
        }

        let kg = match RawWeight::deserialize(deserializer)? {
            RawWeight::Number(n) => n,
            RawWeight::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("invalid weight: {:?}", s)))?,
        };

        Weight::from_kg(kg).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "weight {} outside [{}, {}]",
                kg,
                Weight::MIN_KG,
                Weight::MAX_KG
            ))
        })
    }
}

/// A single weight entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightRecord {
    /// Unique record identifier
    pub id: String,
    /// Owner of the record
    pub user_id: String,
    /// Per-user display ordinal, assigned at creation
    pub seq: u32,
    /// Calendar day the weight was taken
    pub date: NaiveDate,
    /// Measured weight
    pub weight: Weight,
    /// When the record was created
    pub submitted_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

/// A user and their weight history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub records: Vec<WeightRecord>,
}

impl UserData {
    pub fn new(user_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            records: Vec::new(),
        }
    }

    /// Builder: attach records
    pub fn with_records(mut self, records: Vec<WeightRecord>) -> Self {
        self.records = records;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_range() {
        assert!(Weight::from_kg(19.9).is_none());
        assert!(Weight::from_kg(300.1).is_none());
        assert!(Weight::from_kg(f64::NAN).is_none());
        assert_eq!(Weight::from_kg(20.0).unwrap().tenths(), 200);
        assert_eq!(Weight::from_kg(300.0).unwrap().tenths(), 3000);
    }

    #[test]
    fn test_weight_rounds_to_one_digit() {
        assert_eq!(Weight::from_kg(64.46).unwrap().tenths(), 645);
        assert_eq!(Weight::from_kg(64.44).unwrap().tenths(), 644);
    }

    #[test]
    fn test_weight_display_forms() {
        let w = Weight::from_kg(65.0).unwrap();
        assert_eq!(w.to_string(), "65");
        assert_eq!(w.one_decimal(), "65.0");

        let w = Weight::from_kg(64.5).unwrap();
        assert_eq!(w.to_string(), "64.5");
        assert_eq!(w.one_decimal(), "64.5");
    }

    #[test]
    fn test_weight_deserialize_number_or_string() {
        let w: Weight = serde_json::from_str("70.2").unwrap();
        assert_eq!(w.tenths(), 702);

        let w: Weight = serde_json::from_str("\"70.2\"").unwrap();
        assert_eq!(w.tenths(), 702);

        assert!(serde_json::from_str::<Weight>("\"heavy\"").is_err());
        assert!(serde_json::from_str::<Weight>("500").is_err());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let ts = DateTime::from_timestamp(1_709_251_200, 0).unwrap();
        let record = WeightRecord {
            id: "1".to_string(),
            user_id: "user2".to_string(),
            seq: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            weight: Weight::from_kg(65.0).unwrap(),
            submitted_at: ts,
            updated_at: ts,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "user2");
        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["weight"], 65.0);
        assert!(json.get("submittedAt").is_some());
    }
}
