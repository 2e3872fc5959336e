//! Variable values of inspection plan and measurement entities.
//!
//! A [`VariableValue`] holds exactly one of a closed set of payload types.
//! Accessors never convert between payload types: asking an integer value
//! for a double yields `None`.

use crate::core::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone};
use serde::{Deserialize, Serialize};
use std::any::Any;
use uuid::Uuid;

const UNSPECIFIED_DATE_TIME_KIND: &str =
    "Date time values must not have an unspecified date time kind.";

/// Naive date time layouts recognised by [`VariableValue::parse_date_time`]
/// only to report them as lacking an offset.
const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// The type of a variable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableValueType {
    /// No value
    Null,
    /// 32 bit signed integer
    Integer,
    /// 64 bit floating point
    Double,
    /// Text
    String,
    /// Timestamp with offset
    DateTime,
    /// Reference to a catalog entry
    CatalogEntry,
}

impl std::fmt::Display for VariableValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableValueType::Null => write!(f, "null"),
            VariableValueType::Integer => write!(f, "integer"),
            VariableValueType::Double => write!(f, "double"),
            VariableValueType::String => write!(f, "string"),
            VariableValueType::DateTime => write!(f, "datetime"),
            VariableValueType::CatalogEntry => write!(f, "catalog_entry"),
        }
    }
}

/// Reference to an entry of a host catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog the entry belongs to
    pub catalog: Uuid,
    /// Entry key within the catalog
    pub key: i16,
}

impl CatalogEntry {
    /// Create a new catalog entry reference.
    pub fn new(catalog: Uuid, key: i16) -> Self {
        Self { catalog, key }
    }
}

impl std::fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.catalog, self.key)
    }
}

/// Value of an entity variable.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum VariableValue {
    /// No value
    #[default]
    Null,
    /// Integer value
    Integer(i32),
    /// Double value
    Double(f64),
    /// String value
    String(String),
    /// Timestamp, always with an explicit offset
    DateTime(DateTime<FixedOffset>),
    /// Catalog entry reference
    CatalogEntry(CatalogEntry),
}

impl VariableValue {
    /// The null value.
    pub const NULL: VariableValue = VariableValue::Null;

    /// Get the type of the value.
    pub fn value_type(&self) -> VariableValueType {
        match self {
            VariableValue::Null => VariableValueType::Null,
            VariableValue::Integer(_) => VariableValueType::Integer,
            VariableValue::Double(_) => VariableValueType::Double,
            VariableValue::String(_) => VariableValueType::String,
            VariableValue::DateTime(_) => VariableValueType::DateTime,
            VariableValue::CatalogEntry(_) => VariableValueType::CatalogEntry,
        }
    }

    /// Get the payload as a type-erased reference; `None` for null.
    pub fn get_value(&self) -> Option<&dyn Any> {
        match self {
            VariableValue::Null => None,
            VariableValue::Integer(v) => Some(v as &dyn Any),
            VariableValue::Double(v) => Some(v as &dyn Any),
            VariableValue::String(v) => Some(v as &dyn Any),
            VariableValue::DateTime(v) => Some(v as &dyn Any),
            VariableValue::CatalogEntry(v) => Some(v as &dyn Any),
        }
    }

    /// Check whether the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, VariableValue::Null)
    }

    /// Get the value as integer.
    ///
    /// Doubles and strings are never converted.
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            VariableValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as double.
    ///
    /// Integers and strings are never converted.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            VariableValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as string. Other values are never formatted.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            VariableValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Get the value as timestamp.
    pub fn as_date_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            VariableValue::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the value as catalog entry.
    pub fn as_catalog_entry(&self) -> Option<&CatalogEntry> {
        match self {
            VariableValue::CatalogEntry(v) => Some(v),
            _ => None,
        }
    }

    /// Parse a timestamp value from text.
    ///
    /// The text must be RFC 3339 and carry an offset. Text without offset is
    /// rejected the same way a naive timestamp is.
    pub fn parse_date_time(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(value) = DateTime::parse_from_rfc3339(text) {
            return Ok(VariableValue::DateTime(value));
        }

        let is_naive = NAIVE_DATE_TIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok());
        if is_naive {
            return Err(Error::invalid_import_data(UNSPECIFIED_DATE_TIME_KIND));
        }

        Err(Error::invalid_import_data(format!(
            "'{}' is not a valid date time value",
            text
        )))
    }
}

impl PartialEq for VariableValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (VariableValue::Null, VariableValue::Null) => true,
            (VariableValue::Integer(a), VariableValue::Integer(b)) => a == b,
            // NaN equals NaN, 0.0 equals -0.0
            (VariableValue::Double(a), VariableValue::Double(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (VariableValue::String(a), VariableValue::String(b)) => a == b,
            // chrono compares instants only
            (VariableValue::DateTime(a), VariableValue::DateTime(b)) => {
                a == b && a.offset() == b.offset()
            }
            (VariableValue::CatalogEntry(a), VariableValue::CatalogEntry(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for VariableValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableValue::Null => Ok(()),
            VariableValue::Integer(v) => write!(f, "{}", v),
            VariableValue::Double(v) => write!(f, "{}", v),
            VariableValue::String(v) => write!(f, "{}", v),
            VariableValue::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            VariableValue::CatalogEntry(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for VariableValue {
    fn from(value: i32) -> Self {
        VariableValue::Integer(value)
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        VariableValue::Double(value)
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::String(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        VariableValue::String(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for VariableValue {
    fn from(value: DateTime<Tz>) -> Self {
        let offset = value.offset().fix();
        VariableValue::DateTime(value.with_timezone(&offset))
    }
}

impl From<CatalogEntry> for VariableValue {
    fn from(value: CatalogEntry) -> Self {
        VariableValue::CatalogEntry(value)
    }
}

impl<T: Into<VariableValue>> From<Option<T>> for VariableValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// A naive timestamp has no offset and is always rejected.
impl TryFrom<NaiveDateTime> for VariableValue {
    type Error = Error;

    fn try_from(_value: NaiveDateTime) -> Result<Self> {
        Err(Error::invalid_import_data(UNSPECIFIED_DATE_TIME_KIND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, Utc};

    fn sample_catalog_entry() -> CatalogEntry {
        CatalogEntry::new(
            Uuid::parse_str("0c5e9a4e-57d1-4b7f-a3e2-3b3b8f0e9d11").unwrap(),
            3,
        )
    }

    #[test]
    fn test_null_value() {
        let value = VariableValue::default();
        assert!(value.is_null());
        assert_eq!(value.value_type(), VariableValueType::Null);
        assert!(value.get_value().is_none());

        assert!(VariableValue::NULL.is_null());
        assert_eq!(VariableValue::NULL.value_type(), VariableValueType::Null);
        assert!(VariableValue::NULL.get_value().is_none());
        assert_eq!(value, VariableValue::NULL);
    }

    #[test]
    fn test_integer_value() {
        let value = VariableValue::from(42);
        assert_eq!(value.value_type(), VariableValueType::Integer);
        assert_eq!(value.as_integer(), Some(42));
        assert_eq!(value.as_double(), None);
        assert_eq!(value.as_string(), None);
        assert_eq!(value.as_date_time(), None);
        assert!(value.as_catalog_entry().is_none());
        assert!(!value.is_null());
    }

    #[test]
    fn test_double_value() {
        let value = VariableValue::from(0.125);
        assert_eq!(value.value_type(), VariableValueType::Double);
        assert_eq!(value.as_double(), Some(0.125));
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.as_string(), None);
    }

    #[test]
    fn test_string_value() {
        let value = VariableValue::from("x");
        assert_eq!(value.value_type(), VariableValueType::String);
        assert_eq!(value.as_string(), Some("x"));
        assert_eq!(value.as_integer(), None);

        // Numeric text stays text
        let value = VariableValue::from(String::from("42"));
        assert_eq!(value.as_string(), Some("42"));
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.as_double(), None);
    }

    #[test]
    fn test_date_time_keeps_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let timestamp = offset.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap();

        let value = VariableValue::from(timestamp);
        assert_eq!(value.value_type(), VariableValueType::DateTime);

        let stored = value.as_date_time().unwrap();
        assert_eq!(stored, timestamp);
        assert_eq!(stored.offset(), &offset);
        assert_eq!(value.as_string(), None);
    }

    #[test]
    fn test_utc_date_time() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap();
        let value = VariableValue::from(timestamp);

        let stored = value.as_date_time().unwrap();
        assert_eq!(stored.offset().local_minus_utc(), 0);
        assert_eq!(stored, timestamp);
    }

    #[test]
    fn test_naive_date_time_rejected() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();

        let err = VariableValue::try_from(naive).unwrap_err();
        assert!(err.is_invalid_import_data());
        assert!(err.to_string().contains("unspecified date time kind"));
    }

    #[test]
    fn test_equality_includes_offset() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap();
        let shifted = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());

        // Same instant, different offset
        assert_ne!(VariableValue::from(utc), VariableValue::from(shifted));
        assert_eq!(VariableValue::from(shifted), VariableValue::from(shifted));
    }

    #[test]
    fn test_catalog_entry_value() {
        let entry = sample_catalog_entry();
        let value = VariableValue::from(entry.clone());

        assert_eq!(value.value_type(), VariableValueType::CatalogEntry);
        assert_eq!(value.as_catalog_entry(), Some(&entry));
        assert_eq!(value.as_integer(), None);
    }

    #[test]
    fn test_accessors_match_only_own_variant() {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap();
        let values = [
            VariableValue::NULL,
            VariableValue::from(42),
            VariableValue::from(0.5),
            VariableValue::from("text"),
            VariableValue::from(timestamp),
            VariableValue::from(sample_catalog_entry()),
        ];

        for value in &values {
            let kind = value.value_type();
            assert_eq!(
                value.as_integer().is_some(),
                kind == VariableValueType::Integer,
                "as_integer on {}",
                kind
            );
            assert_eq!(
                value.as_double().is_some(),
                kind == VariableValueType::Double,
                "as_double on {}",
                kind
            );
            assert_eq!(
                value.as_string().is_some(),
                kind == VariableValueType::String,
                "as_string on {}",
                kind
            );
            assert_eq!(
                value.as_date_time().is_some(),
                kind == VariableValueType::DateTime,
                "as_date_time on {}",
                kind
            );
            assert_eq!(
                value.as_catalog_entry().is_some(),
                kind == VariableValueType::CatalogEntry,
                "as_catalog_entry on {}",
                kind
            );
            assert_eq!(value.is_null(), kind == VariableValueType::Null);
        }
    }

    #[test]
    fn test_local_date_time_keeps_offset() {
        let timestamp = Local::now();
        let value = VariableValue::from(timestamp);

        let stored = value.as_date_time().unwrap();
        assert_eq!(stored, timestamp);
        assert_eq!(
            stored.offset().local_minus_utc(),
            timestamp.offset().local_minus_utc()
        );
    }

    #[test]
    fn test_nan_equals_itself() {
        let value = VariableValue::from(f64::NAN);
        assert_eq!(value, value.clone());
        assert_eq!(VariableValue::from(0.0), VariableValue::from(-0.0));
        assert_ne!(value, VariableValue::from(0.0));
        assert_ne!(VariableValue::from(1.0), VariableValue::from(1));
    }

    #[test]
    fn test_get_value_downcast() {
        let value = VariableValue::from(42);
        let any = value.get_value().unwrap();
        assert_eq!(any.downcast_ref::<i32>(), Some(&42));
        assert!(any.downcast_ref::<f64>().is_none());

        let value = VariableValue::from("part");
        let any = value.get_value().unwrap();
        assert_eq!(any.downcast_ref::<String>().map(String::as_str), Some("part"));
    }

    #[test]
    fn test_from_option() {
        assert!(VariableValue::from(None::<i32>).is_null());
        assert_eq!(VariableValue::from(Some(7)).as_integer(), Some(7));
    }

    #[test]
    fn test_parse_date_time() {
        let value = VariableValue::parse_date_time("2024-03-01T10:15:00+02:00").unwrap();
        let stored = value.as_date_time().unwrap();
        assert_eq!(stored.offset().local_minus_utc(), 2 * 3600);

        let err = VariableValue::parse_date_time("2024-03-01T10:15:00").unwrap_err();
        assert!(err.to_string().contains("unspecified date time kind"));

        let err = VariableValue::parse_date_time("yesterday").unwrap_err();
        assert!(err.is_invalid_import_data());
    }

    #[test]
    fn test_display() {
        assert_eq!(VariableValue::NULL.to_string(), "");
        assert_eq!(VariableValue::from(42).to_string(), "42");
        assert_eq!(VariableValue::from("abc").to_string(), "abc");

        let value = VariableValue::parse_date_time("2024-03-01T10:15:00+02:00").unwrap();
        assert_eq!(value.to_string(), "2024-03-01T10:15:00+02:00");
    }

    #[test]
    fn test_serialized_date_time_requires_offset() {
        let value = VariableValue::parse_date_time("2024-03-01T10:15:00-05:00").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        let parsed: VariableValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        let naive = r#"{"DateTime":"2024-03-01T10:15:00"}"#;
        assert!(serde_json::from_str::<VariableValue>(naive).is_err());
    }
}
