//! In-memory capture sink
//!
//! Stores everything it receives so tests and embedders can assert on the
//! exact records that were emitted. Clones share the same backing storage.

use crate::core::{ClassifiedRecord, Result, Severity, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Sink that captures records and pass-through messages in memory.
///
/// # Example
///
/// ```
/// use querylog::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = QueryLogger::builder()
///     .config(QueryLogConfig::new().with_verbose(true))
///     .sink(sink.clone())
///     .build()
///     .unwrap();
///
/// logger.info("pool ready");
/// assert_eq!(sink.messages().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<ClassifiedRecord>>>,
    messages: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the classified records captured so far
    pub fn records(&self) -> Vec<ClassifiedRecord> {
        self.records.lock().clone()
    }

    /// Snapshot of the pass-through messages captured so far
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().clone()
    }

    /// Drain and return all captured records
    pub fn take_records(&self) -> Vec<ClassifiedRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty() && self.messages.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
        self.messages.lock().clear();
    }
}

impl Sink for MemorySink {
    fn record(&mut self, record: &ClassifiedRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn log(&mut self, severity: Severity, message: &str) -> Result<()> {
        self.messages.lock().push((severity, message.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldMap;
    use chrono::Utc;

    #[test]
    fn test_clones_share_storage() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();

        let record = ClassifiedRecord::new(
            Severity::Error,
            "SELECT 1 [5ms]",
            FieldMap::new(),
            Utc::now(),
        );
        writer.record(&record).unwrap();

        assert_eq!(sink.records().len(), 1);
        assert_eq!(sink.records()[0].message, "SELECT 1 [5ms]");
    }

    #[test]
    fn test_take_records_drains() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        let record =
            ClassifiedRecord::new(Severity::Warn, "SELECT 1 [1s]", FieldMap::new(), Utc::now());
        writer.record(&record).unwrap();

        assert_eq!(sink.take_records().len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_captures_passthrough_messages() {
        let sink = MemorySink::new();
        let mut writer = sink.clone();
        writer.log(Severity::Info, "hello").unwrap();

        assert_eq!(sink.messages(), vec![(Severity::Info, "hello".to_string())]);
    }
}
