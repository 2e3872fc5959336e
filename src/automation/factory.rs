//! Import automation module: the factory of import runners.

use crate::automation::context::ImportRunnerContext;
use crate::automation::runner::ImportRunner;
use crate::core::Result;

/// Creates an import runner for each started import plan.
pub trait ImportAutomation: Send + Sync {
    /// Create a runner for the import plan described by `context`.
    fn create_import_runner(&self, context: ImportRunnerContext) -> Result<Box<dyn ImportRunner>>;
}
