//! Services Module
//!
//! Host-provided services available to a running plugin:
//! - Logger
//! - Property reader
//! - Status service
//! - Environment info and import target

pub mod environment;
pub mod logger;
pub mod properties;
pub mod status;

pub use environment::{EnvironmentInfo, ImportTarget};
pub use logger::{BufferedLogger, LogEntry, LogLevel, Logger, LoggerConfig, TracingLogger};
pub use properties::{PropertyReader, PropertyReaderExt, PropertyStorage};
pub use status::{Activity, EventSeverity, InMemoryStatusService, StatusEvent, StatusService};
