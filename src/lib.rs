//! # PiWeb Import SDK
//!
//! Contracts and data model for PiWeb import plugins:
//! - **Import Data**: typed variable values and the inspection plan tree
//! - **Automation**: import runners with cooperative cancellation
//! - **Services**: logger, property reader, status service
//! - **Plugin**: plugin entry point, manifest and localization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use piweb_import_sdk::import_data::{ImportData, InspectionPlanPart, VariableValue};
//!
//! let mut data = ImportData::new();
//! let part = data
//!     .root_part_mut()
//!     .add_part(InspectionPlanPart::new("Housing"))
//!     .unwrap();
//! part.set_variable("order", VariableValue::from(4711));
//! assert_eq!(data.root_part().name(), "root");
//! ```

pub mod automation;
pub mod core;
pub mod import_data;
pub mod plugin;
pub mod services;

pub use crate::core::error::{Error, Result};
