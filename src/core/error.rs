//! Error types for the import SDK.

use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building import data or driving a plugin.
#[derive(Error, Debug)]
pub enum Error {
    // Import data errors
    #[error("Invalid import data: {0}")]
    InvalidImportData(String),

    #[error("Duplicate entity: {0}")]
    DuplicateEntity(String),

    // Property storage errors
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Property {key} is not a valid {expected}")]
    PropertyType { key: String, expected: &'static str },

    // Plugin errors
    #[error("Invalid plugin manifest: {0}")]
    InvalidManifest(String),

    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    #[error("Import runner failed: {0}")]
    Runner(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for an invalid import data error.
    pub fn invalid_import_data(message: impl Into<String>) -> Self {
        Error::InvalidImportData(message.into())
    }

    /// Whether this is the invalid import data error.
    pub fn is_invalid_import_data(&self) -> bool {
        matches!(self, Error::InvalidImportData(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
