//! Record form input and validation
//!
//! Raw input from the record form is validated here before anything touches
//! the store. Validation failures are reported per field so the form can
//! show each message next to its input.

use chrono::NaiveDate;
use std::fmt;

use super::types::{Weight, WeightRecord};

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Date,
    Weight,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormField::Date => write!(f, "date"),
            FormField::Weight => write!(f, "weight"),
        }
    }
}

/// A validation message scoped to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: FormField, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All validation failures of one submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    /// First message for a field, if any
    pub fn message_for(&self, field: FormField) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

pub const MSG_DATE_REQUIRED: &str = "Please select a date";
pub const MSG_WEIGHT_REQUIRED: &str = "Please enter a weight";
pub const MSG_WEIGHT_NOT_NUMBER: &str = "Please enter a valid number";
pub const MSG_WEIGHT_TOO_LOW: &str = "Weight cannot be less than 20kg";
pub const MSG_WEIGHT_TOO_HIGH: &str = "Weight cannot exceed 300kg";

/// Raw values of the create/edit record form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordForm {
    pub date: Option<NaiveDate>,
    pub weight: String,
}

/// A validated submission, ready to apply to the store
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordDraft {
    pub date: NaiveDate,
    pub weight: Weight,
}

impl RecordForm {
    pub fn new(date: Option<NaiveDate>, weight: impl Into<String>) -> Self {
        Self {
            date,
            weight: weight.into(),
        }
    }

    /// Empty form defaulting to the given day
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: Some(today),
            weight: String::new(),
        }
    }

    /// Form prefilled from an existing record, for editing
    pub fn from_record(record: &WeightRecord) -> Self {
        Self {
            date: Some(record.date),
            weight: record.weight.to_string(),
        }
    }

    /// Validate the form into a draft
    pub fn validate(&self) -> Result<RecordDraft, FieldErrors> {
        let mut errors = Vec::new();

        if self.date.is_none() {
            errors.push(FieldError::new(FormField::Date, MSG_DATE_REQUIRED));
        }

        let weight = match parse_weight(&self.weight) {
            Ok(w) => Some(w),
            Err(message) => {
                errors.push(FieldError::new(FormField::Weight, message));
                None
            }
        };

        match (self.date, weight) {
            (Some(date), Some(weight)) if errors.is_empty() => Ok(RecordDraft { date, weight }),
            _ => Err(FieldErrors(errors)),
        }
    }
}

/// Parse a weight field, returning the field message on failure
pub fn parse_weight(raw: &str) -> Result<Weight, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MSG_WEIGHT_REQUIRED);
    }

    let kg: f64 = raw.parse().map_err(|_| MSG_WEIGHT_NOT_NUMBER)?;
    if !kg.is_finite() {
        return Err(MSG_WEIGHT_NOT_NUMBER);
    }
    if kg < Weight::MIN_KG {
        return Err(MSG_WEIGHT_TOO_LOW);
    }
    if kg > Weight::MAX_KG {
        return Err(MSG_WEIGHT_TOO_HIGH);
    }

    Weight::from_kg(kg).ok_or(MSG_WEIGHT_NOT_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 3, d)
    }

    #[test]
    fn test_valid_form() {
        let draft = RecordForm::new(day(5), " 64.5 ").validate().unwrap();
        assert_eq!(draft.date, day(5).unwrap());
        assert_eq!(draft.weight.tenths(), 645);
    }

    #[test]
    fn test_weight_bounds() {
        for raw in ["19.9", "0", "-5", "300.1", "1000"] {
            let errors = RecordForm::new(day(1), raw).validate().unwrap_err();
            assert!(errors.message_for(FormField::Weight).is_some(), "{}", raw);
        }

        assert_eq!(
            parse_weight("19.99").unwrap_err(),
            MSG_WEIGHT_TOO_LOW
        );
        assert_eq!(parse_weight("300.01").unwrap_err(), MSG_WEIGHT_TOO_HIGH);
        assert!(parse_weight("20").is_ok());
        assert!(parse_weight("300").is_ok());
    }

    #[test]
    fn test_non_numeric_weight() {
        assert_eq!(parse_weight("abc").unwrap_err(), MSG_WEIGHT_NOT_NUMBER);
        assert_eq!(parse_weight("inf").unwrap_err(), MSG_WEIGHT_NOT_NUMBER);
        assert_eq!(parse_weight("").unwrap_err(), MSG_WEIGHT_REQUIRED);
    }

    #[test]
    fn test_missing_date_and_weight_reported_together() {
        let errors = RecordForm::new(None, "").validate().unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert_eq!(errors.message_for(FormField::Date), Some(MSG_DATE_REQUIRED));
        assert_eq!(
            errors.message_for(FormField::Weight),
            Some(MSG_WEIGHT_REQUIRED)
        );
    }

    #[test]
    fn test_blank_form_defaults_to_today() {
        let today = day(18).unwrap();
        let form = RecordForm::blank(today);
        assert_eq!(form.date, Some(today));
        assert!(form.weight.is_empty());
    }
}
