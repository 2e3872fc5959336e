//! Keyed variable storage shared by all import entities.

use crate::import_data::value::VariableValue;
use serde::Serialize;
use std::collections::BTreeMap;

/// Variables of an entity, ordered by key.
///
/// Writing a key that already exists replaces its value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables {
    entries: BTreeMap<String, VariableValue>,
}

impl Variables {
    /// Create an empty variable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning the previous value for the key.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Option<VariableValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get a variable.
    pub fn get(&self, key: &str) -> Option<&VariableValue> {
        self.entries.get(key)
    }

    /// Remove a variable.
    pub fn remove(&mut self, key: &str) -> Option<VariableValue> {
        self.entries.remove(key)
    }

    /// Check whether a key is set.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no variable is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<VariableValue>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Variables::new();
        for (key, value) in iter {
            variables.set(key, value);
        }
        variables
    }
}
