//! The unit of data a plugin hands to the host.

use crate::import_data::part::InspectionPlanPart;
use serde::Serialize;

/// Name of the default root part.
pub const ROOT_PART_NAME: &str = "root";

/// Data to be imported.
///
/// During import the root part is merged with the import part designated by
/// the import plan and, optionally, the path rule configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImportData {
    root_part: InspectionPlanPart,
}

impl ImportData {
    /// Create import data with an empty root part named `"root"`.
    pub fn new() -> Self {
        Self {
            root_part: InspectionPlanPart::new(ROOT_PART_NAME),
        }
    }

    /// Create import data from an existing root part.
    pub fn with_root_part(root_part: InspectionPlanPart) -> Self {
        Self { root_part }
    }

    /// Get the root part.
    pub fn root_part(&self) -> &InspectionPlanPart {
        &self.root_part
    }

    /// Get the root part for modification.
    pub fn root_part_mut(&mut self) -> &mut InspectionPlanPart {
        &mut self.root_part
    }

    /// Replace the root part, returning the previous one.
    pub fn set_root_part(&mut self, root_part: InspectionPlanPart) -> InspectionPlanPart {
        std::mem::replace(&mut self.root_part, root_part)
    }

    /// Consume the import data, returning the root part.
    pub fn into_root_part(self) -> InspectionPlanPart {
        self.root_part
    }

    /// Number of parts and characteristics, including the root part.
    pub fn entity_count(&self) -> usize {
        self.root_part.entity_count()
    }

    /// Number of measurements in the whole tree.
    pub fn measurement_count(&self) -> usize {
        self.root_part.measurement_count()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> crate::core::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for ImportData {
    fn default() -> Self {
        Self::new()
    }
}
