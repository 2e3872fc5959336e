//! Plugin interface definition.
//!
//! Defines the entry point every import plugin implements.

use crate::automation::ImportAutomation;
use crate::core::Result;
use crate::plugin::localization::{LocalizationHandler, LocalizationHandlerContext};
use crate::plugin::manifest::PluginManifest;
use crate::services::{EnvironmentInfo, Logger};
use std::sync::Arc;

/// Context passed to [`Plugin::init`].
#[derive(Clone)]
pub struct PluginContext {
    /// Information about the hosting environment
    pub environment_info: EnvironmentInfo,
    /// Logger forwarding to the host log file
    pub logger: Arc<dyn Logger>,
}

impl PluginContext {
    /// Create a new context.
    pub fn new(environment_info: EnvironmentInfo, logger: Arc<dyn Logger>) -> Self {
        Self {
            environment_info,
            logger,
        }
    }
}

/// Plugin trait that all import plugins must implement.
pub trait Plugin: Send + Sync {
    /// Get the plugin manifest.
    fn manifest(&self) -> &PluginManifest;

    /// Initialize the plugin once after loading.
    fn init(&mut self, _ctx: &PluginContext) -> Result<()> {
        Ok(())
    }

    /// Create the import automation module with the given manifest module id.
    fn create_import_automation(&self, module_id: &str) -> Result<Box<dyn ImportAutomation>>;

    /// Create a localization handler. Plugins without translations keep the
    /// default.
    fn create_localization_handler(
        &self,
        _ctx: &LocalizationHandlerContext,
    ) -> Option<Box<dyn LocalizationHandler>> {
        None
    }
}
