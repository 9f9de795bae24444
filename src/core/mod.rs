//! Core classifier types and traits

pub mod classifier;
pub mod config;
pub mod elapsed;
pub mod error;
pub mod event;
pub mod fields;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod severity;
pub mod sink;

pub use classifier::{classify, ERROR_FIELD};
pub use config::QueryLogConfig;
pub use elapsed::format_elapsed;
pub use error::{QueryLogError, Result};
pub use event::{QueryError, QueryEvent, SqlProducer};
pub use fields::{FieldMap, FieldValue};
pub use logger::{QueryLogger, QueryLoggerBuilder, SourceProbe};
pub use metrics::QueryLogMetrics;
pub use record::ClassifiedRecord;
pub use severity::Severity;
pub use sink::Sink;
