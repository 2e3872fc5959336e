//! Import Automation Module
//!
//! Lifecycle contract of custom import automations:
//! - Import runner and its context
//! - Runner factory
//! - Import data handoff
//! - Spawned runner handle

pub mod context;
pub mod factory;
pub mod handle;
pub mod runner;
pub mod sink;

pub use context::ImportRunnerContext;
pub use factory::ImportAutomation;
pub use handle::RunnerHandle;
pub use runner::ImportRunner;
pub use sink::{CollectingSink, ImportSink};
