//! Import Data Module
//!
//! Data model a plugin populates during an import run:
//! - Typed variable values
//! - Inspection plan tree (parts and characteristics)
//! - Measurements

pub mod data;
pub mod measurement;
pub mod part;
pub mod value;
pub mod variables;

pub use data::{ImportData, ROOT_PART_NAME};
pub use measurement::{Measurement, MeasurementValue};
pub use part::{InspectionPlanCharacteristic, InspectionPlanPart};
pub use value::{CatalogEntry, VariableValue, VariableValueType};
pub use variables::Variables;
