//! Localization of plugin texts.

use crate::core::Result;
use crate::services::Logger;
use std::collections::HashMap;
use std::sync::Arc;

/// Context for creating a [`LocalizationHandler`].
#[derive(Clone)]
pub struct LocalizationHandlerContext {
    /// Logger forwarding to the host log file
    pub logger: Arc<dyn Logger>,
}

impl LocalizationHandlerContext {
    /// Create a new context.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

/// Translates plugin texts for the host UI.
pub trait LocalizationHandler: Send + Sync {
    /// Get the text for `key` in `culture`, if known.
    fn localize(&self, key: &str, culture: &str) -> Option<String>;
}

/// Localization backed by per-culture lookup tables.
///
/// Lookup falls back from the specific culture (`de-DE`) to its language
/// (`de`) and finally to the invariant table (`""`).
#[derive(Clone, Debug, Default)]
pub struct TableLocalizationHandler {
    tables: HashMap<String, HashMap<String, String>>,
}

impl TableLocalizationHandler {
    /// Create an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tables from a JSON object of the form `{ culture: { key: text } }`.
    pub fn from_json(json: &str, context: &LocalizationHandlerContext) -> Result<Self> {
        let tables: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        context.logger.debug(&format!(
            "Loaded localization tables for {} culture(s)",
            tables.len()
        ));
        Ok(Self { tables })
    }

    /// Add a text.
    pub fn with_text(mut self, culture: &str, key: &str, text: &str) -> Self {
        self.tables
            .entry(culture.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
        self
    }
}

impl LocalizationHandler for TableLocalizationHandler {
    fn localize(&self, key: &str, culture: &str) -> Option<String> {
        let language = culture.split('-').next().unwrap_or_default();
        [culture, language, ""]
            .iter()
            .filter_map(|c| self.tables.get(*c))
            .find_map(|table| table.get(key))
            .cloned()
    }
}
