//! Plugin manifest (`manifest.json`).
//!
//! Declares the plugin identity and the modules it provides. The host reads
//! the manifest before loading any plugin code.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// File name of the manifest inside a plugin directory.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Kind of module a plugin provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleType {
    /// Runs custom import logic
    ImportAutomation,
    /// Parses a file format
    ImportFormat,
}

impl std::fmt::Display for ModuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleType::ImportAutomation => write!(f, "ImportAutomation"),
            ModuleType::ImportFormat => write!(f, "ImportFormat"),
        }
    }
}

/// A module declared in the manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleManifest {
    /// Module id, unique within the plugin
    pub id: String,
    /// Module type
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    /// Display name
    pub title: String,
}

/// Plugin manifest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    /// Plugin id
    pub id: String,
    /// Version, `major.minor.patch` with optional pre-release suffix
    pub version: String,
    /// Display name
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Provided modules
    #[serde(default)]
    pub modules: Vec<ModuleManifest>,
}

impl PluginManifest {
    /// Create a new manifest without modules.
    pub fn new(id: &str, title: &str, version: &str) -> Self {
        Self {
            id: id.to_string(),
            version: version.to_string(),
            title: title.to_string(),
            description: String::new(),
            modules: Vec::new(),
        }
    }

    /// Set description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Add a module.
    pub fn with_module(mut self, id: &str, module_type: ModuleType, title: &str) -> Self {
        self.modules.push(ModuleManifest {
            id: id.to_string(),
            module_type,
            title: title.to_string(),
        });
        self
    }

    /// Parse and validate a manifest.
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: PluginManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and validate a manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading plugin manifest");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the manifest for consistency.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidManifest("plugin id must not be empty".to_string()));
        }
        if !is_valid_version(&self.version) {
            return Err(Error::InvalidManifest(format!(
                "'{}' is not a valid version",
                self.version
            )));
        }

        let mut seen = HashSet::new();
        for module in &self.modules {
            if module.id.trim().is_empty() {
                return Err(Error::InvalidManifest("module id must not be empty".to_string()));
            }
            if !seen.insert(module.id.as_str()) {
                return Err(Error::InvalidManifest(format!(
                    "module '{}' is declared more than once",
                    module.id
                )));
            }
        }
        Ok(())
    }

    /// Get a module by id.
    pub fn module(&self, id: &str) -> Option<&ModuleManifest> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Modules of a given type.
    pub fn modules_of_type(&self, module_type: ModuleType) -> impl Iterator<Item = &ModuleManifest> {
        self.modules
            .iter()
            .filter(move |m| m.module_type == module_type)
    }
}

fn is_valid_version(version: &str) -> bool {
    let version = match version.split_once('+') {
        Some((_, build)) if build.is_empty() => return false,
        Some((version, _)) => version,
        None => version,
    };
    let core = match version.split_once('-') {
        Some((_, pre_release)) if pre_release.is_empty() => return false,
        Some((core, _)) => core,
        None => version,
    };
    let parts: Vec<&str> = core.split('.').collect();
    parts.len() == 3 && parts.iter().all(|p| !p.is_empty() && p.parse::<u64>().is_ok())
}
