//! Record - Field Access Shared by Tables and Record Services
//!
//! Every record type shown in a data table exposes its columns through
//! [`Record::field`], so the table, the sort and the filters can work on any
//! record without knowing its concrete shape.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A single field value of a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Date(NaiveDate),
    Bool(bool),
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Integer(_) => 1,
            FieldValue::Date(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }

    /// Case-insensitive substring match against the display form
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        if needle.is_empty() {
            return true;
        }
        self.to_string()
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::Bool(true) => f.write_str("Yes"),
            FieldValue::Bool(false) => f.write_str("No"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// A row type that can be listed, sorted and filtered by field key
pub trait Record: Clone + Send + Sync + 'static {
    /// Field keys this record answers in [`Record::field`]
    const FIELDS: &'static [&'static str];

    /// Stable identity, if the record has one
    fn id(&self) -> Option<&str>;

    /// Look up a field by key; `None` for unknown keys or absent values
    fn field(&self, key: &str) -> Option<FieldValue>;

    fn has_field(key: &str) -> bool {
        Self::FIELDS.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_orders_case_insensitively() {
        let mut values = vec![
            FieldValue::from("bravo"),
            FieldValue::from("Alpha"),
            FieldValue::from("alpha"),
            FieldValue::from("Charlie"),
        ];
        values.sort();

        let names: Vec<String> = values.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["Alpha", "alpha", "bravo", "Charlie"]);
    }

    #[test]
    fn dates_display_as_iso() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid date");
        assert_eq!(FieldValue::from(date).to_string(), "2026-03-09");
    }

    #[test]
    fn matches_ignores_case_and_blank_needles() {
        let value = FieldValue::from("Science Stream");
        assert!(value.matches("science"));
        assert!(value.matches("  "));
        assert!(!value.matches("arts"));
        assert!(FieldValue::from(2026_i64).matches("02"));
    }
}
