//! Read access to the plugin configuration property storage.

use crate::core::{Error, Result};
use chrono::{DateTime, FixedOffset};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// Read-only access to configured properties.
pub trait PropertyReader: Send + Sync {
    /// Get the raw value of a property.
    fn get(&self, key: &str) -> Option<Value>;

    /// All configured keys.
    fn keys(&self) -> Vec<String>;
}

/// Typed reads on top of [`PropertyReader`].
///
/// The `read_*` methods return `None` for missing keys and values of another
/// type. The `require_*` methods report both cases as errors.
pub trait PropertyReaderExt: PropertyReader {
    /// Check whether a property is configured.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Read a string property.
    fn read_string(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Read an integer property.
    fn read_integer(&self, key: &str) -> Option<i64> {
        self.get(key)?.as_i64()
    }

    /// Read a floating point property. Integral JSON numbers are accepted.
    fn read_double(&self, key: &str) -> Option<f64> {
        self.get(key)?.as_f64()
    }

    /// Read a boolean property.
    fn read_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Read a timestamp property stored as RFC 3339 text with offset.
    fn read_date_time(&self, key: &str) -> Option<DateTime<FixedOffset>> {
        let text = self.read_string(key)?;
        DateTime::parse_from_rfc3339(&text).ok()
    }

    /// Deserialize a property into `T`.
    fn read_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| serde_json::from_value(v).ok())
    }

    /// Read a string property that must exist.
    fn require_string(&self, key: &str) -> Result<String> {
        require(self, key, "string", |v| v.as_str().map(str::to_string))
    }

    /// Read an integer property that must exist.
    fn require_integer(&self, key: &str) -> Result<i64> {
        require(self, key, "integer", Value::as_i64)
    }

    /// Read a boolean property that must exist.
    fn require_bool(&self, key: &str) -> Result<bool> {
        require(self, key, "boolean", Value::as_bool)
    }
}

impl<R: PropertyReader + ?Sized> PropertyReaderExt for R {}

fn require<R, T>(
    reader: &R,
    key: &str,
    expected: &'static str,
    convert: impl FnOnce(&Value) -> Option<T>,
) -> Result<T>
where
    R: PropertyReader + ?Sized,
{
    let value = reader
        .get(key)
        .ok_or_else(|| Error::PropertyNotFound(key.to_string()))?;
    convert(&value).ok_or_else(|| Error::PropertyType {
        key: key.to_string(),
        expected,
    })
}

/// In-memory property storage.
#[derive(Clone, Debug, Default)]
pub struct PropertyStorage {
    properties: BTreeMap<String, Value>,
}

impl PropertyStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str(json)? {
            Value::Object(map) => Ok(Self {
                properties: map.into_iter().collect(),
            }),
            other => Err(Error::SerializationError(format!(
                "property storage must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Add a property.
    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property, returning the previous value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.to_string(), value.into())
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check whether the storage is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyReader for PropertyStorage {
    fn get(&self, key: &str) -> Option<Value> {
        self.properties.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::Arc;

    fn storage() -> PropertyStorage {
        PropertyStorage::from_json(
            r#"{
                "directory": "/data/import",
                "interval_seconds": 30,
                "tolerance": 0.05,
                "delete_after_import": true,
                "since": "2024-01-01T00:00:00+01:00",
                "mapping": { "column": "Diameter", "factor": 2 }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_typed_reads() {
        let props = storage();
        assert_eq!(props.read_string("directory").as_deref(), Some("/data/import"));
        assert_eq!(props.read_integer("interval_seconds"), Some(30));
        assert_eq!(props.read_double("tolerance"), Some(0.05));
        assert_eq!(props.read_bool("delete_after_import"), Some(true));
        assert_eq!(
            props
                .read_date_time("since")
                .map(|t| t.offset().local_minus_utc()),
            Some(3600)
        );
    }

    #[test]
    fn test_wrong_type_is_none() {
        let props = storage();
        assert_eq!(props.read_integer("directory"), None);
        assert_eq!(props.read_string("interval_seconds"), None);
        assert_eq!(props.read_bool("tolerance"), None);
        assert_eq!(props.read_date_time("directory"), None);
        assert_eq!(props.read_string("missing"), None);
    }

    #[test]
    fn test_read_as() {
        #[derive(Deserialize, PartialEq, Debug)]
        struct Mapping {
            column: String,
            factor: i32,
        }

        let props = storage();
        let mapping: Option<Mapping> = props.read_as("mapping");
        assert_eq!(
            mapping,
            Some(Mapping {
                column: "Diameter".to_string(),
                factor: 2
            })
        );
        assert!(props.read_as::<Mapping>("directory").is_none());
    }

    #[test]
    fn test_require() {
        let props = storage();
        assert_eq!(props.require_integer("interval_seconds").unwrap(), 30);

        let err = props.require_string("missing").unwrap_err();
        assert!(matches!(err, Error::PropertyNotFound(ref key) if key == "missing"));

        let err = props.require_bool("directory").unwrap_err();
        assert!(matches!(err, Error::PropertyType { expected: "boolean", .. }));
    }

    #[test]
    fn test_reader_through_trait_object() {
        let reader: Arc<dyn PropertyReader> =
            Arc::new(PropertyStorage::new().with_property("name", "line-1"));
        assert_eq!(reader.read_string("name").as_deref(), Some("line-1"));
        assert!(reader.contains("name"));
        assert_eq!(reader.keys(), vec!["name".to_string()]);
    }

    #[test]
    fn test_from_json_requires_object() {
        assert!(PropertyStorage::from_json("[1, 2]").is_err());
        assert!(PropertyStorage::from_json("{").is_err());
        assert!(PropertyStorage::from_json("{}").unwrap().is_empty());
    }
}
