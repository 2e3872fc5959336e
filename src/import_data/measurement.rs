//! Measurements attached to inspection plan parts.

use crate::import_data::value::VariableValue;
use crate::import_data::variables::Variables;
use serde::Serialize;
use std::collections::BTreeMap;

/// Variable key holding the measured value of a [`MeasurementValue`].
pub const MEASURED_VALUE_KEY: &str = "value";

/// A single value measured for one characteristic.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MeasurementValue {
    variables: Variables,
}

impl MeasurementValue {
    /// Create a measurement value holding `value`.
    pub fn new(value: f64) -> Self {
        let mut variables = Variables::new();
        variables.set(MEASURED_VALUE_KEY, value);
        Self { variables }
    }

    /// Create a measurement value without a measured value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn with_variable(mut self, key: &str, value: impl Into<VariableValue>) -> Self {
        self.variables.set(key, value);
        self
    }

    /// The measured value, if present and a double.
    pub fn measured_value(&self) -> Option<f64> {
        self.variables.get(MEASURED_VALUE_KEY).and_then(VariableValue::as_double)
    }

    /// Get the variables.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Get the variables for modification.
    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }
}

/// A measurement of a part: measurement variables plus one value per
/// characteristic, keyed by the characteristic path relative to the part.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Measurement {
    variables: Variables,
    values: BTreeMap<String, MeasurementValue>,
}

impl Measurement {
    /// Create an empty measurement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a measurement variable, returning the previous value.
    pub fn set_variable(
        &mut self,
        key: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Option<VariableValue> {
        self.variables.set(key, value)
    }

    /// Get a measurement variable.
    pub fn variable(&self, key: &str) -> Option<&VariableValue> {
        self.variables.get(key)
    }

    /// Get the variables.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Add the value of a characteristic. Replaces an existing value for the
    /// same path.
    pub fn add_value(
        &mut self,
        characteristic_path: impl Into<String>,
        value: MeasurementValue,
    ) -> Option<MeasurementValue> {
        self.values.insert(characteristic_path.into(), value)
    }

    /// Get the value of a characteristic.
    pub fn value(&self, characteristic_path: &str) -> Option<&MeasurementValue> {
        self.values.get(characteristic_path)
    }

    /// Iterate values ordered by characteristic path.
    pub fn values(&self) -> impl Iterator<Item = (&str, &MeasurementValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of characteristic values.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}
