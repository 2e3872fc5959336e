//! Context of an import runner, provided by the host.

use crate::automation::sink::{CollectingSink, ImportSink};
use crate::core::ImportPlanId;
use crate::services::{
    EnvironmentInfo, ImportTarget, InMemoryStatusService, Logger, PropertyReader,
    PropertyStorage, StatusService, TracingLogger,
};
use std::sync::Arc;

/// Everything the host hands to an import runner.
#[derive(Clone)]
pub struct ImportRunnerContext {
    /// Id of the associated import plan
    pub import_plan_id: ImportPlanId,
    /// Information about the hosting environment
    pub environment_info: EnvironmentInfo,
    /// Logger forwarding to the host log file
    pub logger: Arc<dyn Logger>,
    /// The configured import target
    pub import_target: ImportTarget,
    /// Reader for the configuration property storage
    pub property_reader: Arc<dyn PropertyReader>,
    /// Status display of the running import plan
    pub status_service: Arc<dyn StatusService>,
    /// Receives the data to import
    pub import_sink: Arc<dyn ImportSink>,
}

impl ImportRunnerContext {
    /// Create a context backed by in-memory services.
    ///
    /// Hosts replace the services with the `with_*` methods.
    pub fn new(import_plan_id: ImportPlanId, import_target: ImportTarget) -> Self {
        Self {
            import_plan_id,
            environment_info: EnvironmentInfo::default(),
            logger: Arc::new(TracingLogger::new(&import_plan_id.to_string())),
            import_target,
            property_reader: Arc::new(PropertyStorage::new()),
            status_service: Arc::new(InMemoryStatusService::default()),
            import_sink: Arc::new(CollectingSink::new()),
        }
    }

    /// Set the environment info.
    pub fn with_environment_info(mut self, environment_info: EnvironmentInfo) -> Self {
        self.environment_info = environment_info;
        self
    }

    /// Set the logger.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set the property reader.
    pub fn with_property_reader(mut self, property_reader: Arc<dyn PropertyReader>) -> Self {
        self.property_reader = property_reader;
        self
    }

    /// Set the status service.
    pub fn with_status_service(mut self, status_service: Arc<dyn StatusService>) -> Self {
        self.status_service = status_service;
        self
    }

    /// Set the import sink.
    pub fn with_import_sink(mut self, import_sink: Arc<dyn ImportSink>) -> Self {
        self.import_sink = import_sink;
        self
    }
}

impl std::fmt::Debug for ImportRunnerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportRunnerContext")
            .field("import_plan_id", &self.import_plan_id)
            .field("environment_info", &self.environment_info)
            .field("import_target", &self.import_target)
            .finish_non_exhaustive()
    }
}
