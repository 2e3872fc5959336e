//! Descriptors of the hosting environment and the configured import target.

use crate::import_data::part::PATH_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Version of this SDK.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Information about the environment a plugin is hosted in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    /// Name of the hosting application
    pub application_name: String,
    /// Version of the hosting application
    pub application_version: String,
    /// SDK version the host was built against
    pub sdk_version: String,
    /// Directory the plugin was loaded from
    pub plugin_directory: Option<PathBuf>,
    /// UI culture, e.g. `de-DE`
    pub culture: String,
}

impl EnvironmentInfo {
    /// Create environment info for an application.
    pub fn new(application_name: &str, application_version: &str) -> Self {
        Self {
            application_name: application_name.to_string(),
            application_version: application_version.to_string(),
            sdk_version: SDK_VERSION.to_string(),
            plugin_directory: None,
            culture: "en".to_string(),
        }
    }

    /// Set the plugin directory.
    pub fn with_plugin_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.plugin_directory = Some(directory.into());
        self
    }

    /// Set the culture.
    pub fn with_culture(mut self, culture: &str) -> Self {
        self.culture = culture.to_string();
        self
    }
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        Self::new("PiWeb Auto Importer", "0.0.0")
    }
}

/// Where imported data is merged into the host inspection plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTarget {
    /// Absolute `/` separated path of the target part
    pub path: String,
    /// Name of the path rule applied while merging, if any
    pub path_rule: Option<String>,
}

impl ImportTarget {
    /// Create a target for a part path. The path is normalized to start with
    /// `/` and not end with one.
    pub fn new(path: &str) -> Self {
        let mut normalized = String::with_capacity(path.len() + 1);
        for segment in path.split(PATH_SEPARATOR).filter(|s| !s.is_empty()) {
            normalized.push(PATH_SEPARATOR);
            normalized.push_str(segment);
        }
        if normalized.is_empty() {
            normalized.push(PATH_SEPARATOR);
        }
        Self {
            path: normalized,
            path_rule: None,
        }
    }

    /// The root of the inspection plan.
    pub fn root() -> Self {
        Self::new("/")
    }

    /// Set the path rule.
    pub fn with_path_rule(mut self, rule: &str) -> Self {
        self.path_rule = Some(rule.to_string());
        self
    }

    /// Whether the target is the inspection plan root.
    pub fn is_root(&self) -> bool {
        self.segments().next().is_none()
    }

    /// Path segments below the root.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
    }
}

impl Default for ImportTarget {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Display for ImportTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path_rule {
            Some(rule) => write!(f, "{} ({})", self.path, rule),
            None => write!(f, "{}", self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_info() {
        let info = EnvironmentInfo::new("PiWeb Auto Importer", "8.4.0")
            .with_plugin_directory("/opt/piweb/plugins/csv")
            .with_culture("de-DE");

        assert_eq!(info.sdk_version, SDK_VERSION);
        assert_eq!(info.culture, "de-DE");
        assert!(info.plugin_directory.is_some());
    }

    #[test]
    fn test_import_target_normalized() {
        let target = ImportTarget::new("Plant//Line1/");
        assert_eq!(target.path, "/Plant/Line1");
        assert_eq!(target.segments().collect::<Vec<_>>(), vec!["Plant", "Line1"]);
        assert!(!target.is_root());

        assert!(ImportTarget::root().is_root());
        assert!(ImportTarget::new("").is_root());
        assert_eq!(ImportTarget::new("//").path, PATH_SEPARATOR.to_string());
        assert_eq!(ImportTarget::new("/a/b/c/").path, "/a/b/c");
    }

    #[test]
    fn test_import_target_display() {
        let target = ImportTarget::new("/Plant").with_path_rule("by-order");
        assert_eq!(target.to_string(), "/Plant (by-order)");
        assert_eq!(ImportTarget::root().to_string(), "/");
    }
}
