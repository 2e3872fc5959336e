//! Common types used across SDK modules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an import plan configured in the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportPlanId(pub Uuid);

impl ImportPlanId {
    /// Create an id from an existing uuid.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Create a random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying uuid.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ImportPlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ImportPlanId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// Timestamp wrapper for consistent serialization.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Get current UTC timestamp.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}
