//! Plugin Module
//!
//! Entry point of an import plugin:
//! - Plugin interface
//! - Plugin manifest
//! - Localization

pub mod interface;
pub mod localization;
pub mod manifest;

pub use interface::{Plugin, PluginContext};
pub use localization::{LocalizationHandler, LocalizationHandlerContext, TableLocalizationHandler};
pub use manifest::{ModuleManifest, ModuleType, PluginManifest, MANIFEST_FILE_NAME};
