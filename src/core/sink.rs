//! Sink trait for classified record destinations

use super::{error::Result, record::ClassifiedRecord, severity::Severity};

/// Destination for classified query records.
///
/// Implementations must be safe for concurrent invocation; the logger
/// serializes access through its own lock but makes no ordering promises
/// across sinks.
pub trait Sink: Send + Sync {
    /// Record a classified query event.
    fn record(&mut self, record: &ClassifiedRecord) -> Result<()>;

    /// Record a plain message outside the query-classification path.
    fn log(&mut self, severity: Severity, message: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    fn name(&self) -> &str;
}
