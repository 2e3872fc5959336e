//! Handoff of import data to the host.

use crate::core::Result;
use crate::import_data::ImportData;
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::debug;

/// Accepts import data for merging into the configured import target.
///
/// The plugin gives up ownership of the data on submit.
#[async_trait]
pub trait ImportSink: Send + Sync {
    /// Submit data for import.
    async fn submit(&self, data: ImportData) -> Result<()>;
}

/// Sink that stores all submitted data in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    submitted: Mutex<Vec<ImportData>>,
}

impl CollectingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of submissions so far.
    pub fn count(&self) -> usize {
        self.submitted.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Take all submitted data, leaving the sink empty.
    pub fn take(&self) -> Vec<ImportData> {
        std::mem::take(&mut *self.submitted.lock().unwrap_or_else(|e| e.into_inner()))
    }
}

#[async_trait]
impl ImportSink for CollectingSink {
    async fn submit(&self, data: ImportData) -> Result<()> {
        debug!(
            entities = data.entity_count(),
            measurements = data.measurement_count(),
            "Import data submitted"
        );
        self.submitted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import_data::InspectionPlanPart;

    #[tokio::test]
    async fn test_collecting_sink() {
        let sink = CollectingSink::new();

        let mut data = ImportData::new();
        data.root_part_mut()
            .add_part(InspectionPlanPart::new("Housing"))
            .unwrap();
        sink.submit(data).await.unwrap();
        sink.submit(ImportData::new()).await.unwrap();

        assert_eq!(sink.count(), 2);
        let taken = sink.take();
        assert_eq!(taken.len(), 2);
        assert!(taken[0].root_part().part("Housing").is_some());
        assert_eq!(sink.count(), 0);
    }
}
