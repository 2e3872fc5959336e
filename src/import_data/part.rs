//! Inspection plan entities: parts and characteristics.
//!
//! Children are owned by their parent, so a tree is always finite and
//! acyclic. Sibling parts and characteristics share one name space.

use crate::core::{Error, Result};
use crate::import_data::measurement::Measurement;
use crate::import_data::value::VariableValue;
use crate::import_data::variables::Variables;
use serde::Serialize;

/// Separator of inspection plan path segments.
pub const PATH_SEPARATOR: char = '/';

/// A characteristic of the inspection plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InspectionPlanCharacteristic {
    name: String,
    variables: Variables,
    characteristics: Vec<InspectionPlanCharacteristic>,
}

impl InspectionPlanCharacteristic {
    /// Create a new characteristic.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Variables::new(),
            characteristics: Vec::new(),
        }
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a variable, returning the previous value.
    pub fn set_variable(
        &mut self,
        key: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Option<VariableValue> {
        self.variables.set(key, value)
    }

    /// Get a variable.
    pub fn variable(&self, key: &str) -> Option<&VariableValue> {
        self.variables.get(key)
    }

    /// Remove a variable.
    pub fn remove_variable(&mut self, key: &str) -> Option<VariableValue> {
        self.variables.remove(key)
    }

    /// Get the variables.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Add a child characteristic.
    pub fn add_characteristic(
        &mut self,
        characteristic: InspectionPlanCharacteristic,
    ) -> Result<&mut InspectionPlanCharacteristic> {
        if self.characteristic(&characteristic.name).is_some() {
            return Err(duplicate(&self.name, &characteristic.name));
        }
        let index = self.characteristics.len();
        self.characteristics.push(characteristic);
        Ok(&mut self.characteristics[index])
    }

    /// Get a child characteristic by name.
    pub fn characteristic(&self, name: &str) -> Option<&InspectionPlanCharacteristic> {
        self.characteristics.iter().find(|c| c.name == name)
    }

    /// Get the child characteristics.
    pub fn characteristics(&self) -> &[InspectionPlanCharacteristic] {
        &self.characteristics
    }

    /// Number of characteristics in this subtree, including this one.
    pub fn entity_count(&self) -> usize {
        1 + self
            .characteristics
            .iter()
            .map(InspectionPlanCharacteristic::entity_count)
            .sum::<usize>()
    }
}

/// A part of the inspection plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InspectionPlanPart {
    name: String,
    variables: Variables,
    parts: Vec<InspectionPlanPart>,
    characteristics: Vec<InspectionPlanCharacteristic>,
    measurements: Vec<Measurement>,
}

impl InspectionPlanPart {
    /// Create a new, empty part.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Variables::new(),
            parts: Vec::new(),
            characteristics: Vec::new(),
            measurements: Vec::new(),
        }
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set a variable, returning the previous value.
    pub fn set_variable(
        &mut self,
        key: impl Into<String>,
        value: impl Into<VariableValue>,
    ) -> Option<VariableValue> {
        self.variables.set(key, value)
    }

    /// Get a variable.
    pub fn variable(&self, key: &str) -> Option<&VariableValue> {
        self.variables.get(key)
    }

    /// Remove a variable.
    pub fn remove_variable(&mut self, key: &str) -> Option<VariableValue> {
        self.variables.remove(key)
    }

    /// Get the variables.
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Add a child part.
    ///
    /// Fails when a child part or characteristic with the same name exists.
    pub fn add_part(&mut self, part: InspectionPlanPart) -> Result<&mut InspectionPlanPart> {
        if self.has_child(&part.name) {
            return Err(duplicate(&self.name, &part.name));
        }
        let index = self.parts.len();
        self.parts.push(part);
        Ok(&mut self.parts[index])
    }

    /// Add a characteristic.
    ///
    /// Fails when a child part or characteristic with the same name exists.
    pub fn add_characteristic(
        &mut self,
        characteristic: InspectionPlanCharacteristic,
    ) -> Result<&mut InspectionPlanCharacteristic> {
        if self.has_child(&characteristic.name) {
            return Err(duplicate(&self.name, &characteristic.name));
        }
        let index = self.characteristics.len();
        self.characteristics.push(characteristic);
        Ok(&mut self.characteristics[index])
    }

    /// Attach a measurement.
    pub fn add_measurement(&mut self, measurement: Measurement) -> &mut Measurement {
        let index = self.measurements.len();
        self.measurements.push(measurement);
        &mut self.measurements[index]
    }

    /// Get a child part by name.
    pub fn part(&self, name: &str) -> Option<&InspectionPlanPart> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Get a child part by name for modification.
    pub fn part_mut(&mut self, name: &str) -> Option<&mut InspectionPlanPart> {
        self.parts.iter_mut().find(|p| p.name == name)
    }

    /// Get a characteristic by name.
    pub fn characteristic(&self, name: &str) -> Option<&InspectionPlanCharacteristic> {
        self.characteristics.iter().find(|c| c.name == name)
    }

    /// Get a characteristic by name for modification.
    pub fn characteristic_mut(&mut self, name: &str) -> Option<&mut InspectionPlanCharacteristic> {
        self.characteristics.iter_mut().find(|c| c.name == name)
    }

    /// Get the child parts.
    pub fn parts(&self) -> &[InspectionPlanPart] {
        &self.parts
    }

    /// Get the characteristics.
    pub fn characteristics(&self) -> &[InspectionPlanCharacteristic] {
        &self.characteristics
    }

    /// Get the measurements.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Find a descendant part by `/` separated path relative to this part.
    ///
    /// Empty segments are ignored, so an empty path yields this part.
    pub fn find_part(&self, path: &str) -> Option<&InspectionPlanPart> {
        path.split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |part, segment| part.part(segment))
    }

    /// Find a descendant part by path for modification.
    pub fn find_part_mut(&mut self, path: &str) -> Option<&mut InspectionPlanPart> {
        path.split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |part, segment| part.part_mut(segment))
    }

    /// Iterate all descendant parts in pre-order, excluding this part.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.parts.iter().rev().collect(),
        }
    }

    /// Number of parts and characteristics in this subtree, including this part.
    pub fn entity_count(&self) -> usize {
        let characteristics: usize = self
            .characteristics
            .iter()
            .map(InspectionPlanCharacteristic::entity_count)
            .sum();
        let parts: usize = self.parts.iter().map(InspectionPlanPart::entity_count).sum();
        1 + characteristics + parts
    }

    /// Number of measurements in this subtree.
    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
            + self
                .parts
                .iter()
                .map(InspectionPlanPart::measurement_count)
                .sum::<usize>()
    }

    fn has_child(&self, name: &str) -> bool {
        self.part(name).is_some() || self.characteristic(name).is_some()
    }
}

/// Pre-order iterator over descendant parts.
pub struct Descendants<'a> {
    stack: Vec<&'a InspectionPlanPart>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a InspectionPlanPart;

    fn next(&mut self) -> Option<Self::Item> {
        let part = self.stack.pop()?;
        self.stack.extend(part.parts.iter().rev());
        Some(part)
    }
}

fn duplicate(parent: &str, name: &str) -> Error {
    Error::DuplicateEntity(format!("'{}' already contains an entity named '{}'", parent, name))
}
