//! # Querylog
//!
//! A severity classifier and structured logger for database query
//! execution events.
//!
//! Given a completed query (its SQL text, duration, and outcome), the
//! classifier decides which severity the event should be recorded at,
//! builds a structured record, and dispatches it to the configured sinks.
//! Errors always surface first, slow queries warn even without an error,
//! and everything else is opt-in debug noise.
//!
//! ## Features
//!
//! - **Priority-ordered classification**: Error > slow-query Warn > verbose Debug
//! - **Not-found suppression**: "no rows matched" can be demoted below error
//! - **Structured Fields**: call-site location and error details as key-value fields
//! - **Thread Safe**: one logger serves concurrent query events
//!
//! ## Quick Start
//!
//! ```
//! use querylog::prelude::*;
//! use chrono::Utc;
//! use std::time::Duration;
//!
//! let sink = MemorySink::new();
//! let logger = QueryLogger::builder()
//!     .config(
//!         QueryLogConfig::new()
//!             .with_suppress_not_found(true)
//!             .with_slow_threshold(Duration::from_millis(200))
//!             .with_source_field("source"),
//!     )
//!     .sink(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! // At query completion:
//! let started = Utc::now();
//! logger.trace(
//!     QueryEvent::new(started, || ("SELECT * FROM users WHERE id = 1".to_string(), 1))
//!         .with_outcome(QueryError::execution("connection reset")),
//! );
//!
//! assert_eq!(sink.records()[0].severity, Severity::Error);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::sinks::MemorySink;
    pub use crate::core::{
        classify, ClassifiedRecord, FieldMap, FieldValue, QueryError, QueryEvent, QueryLogConfig,
        QueryLogError, QueryLogMetrics, QueryLogger, QueryLoggerBuilder, Result, Severity, Sink,
        SourceProbe, SqlProducer, ERROR_FIELD,
    };
}

#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
pub use sinks::MemorySink;
pub use core::{
    classify, format_elapsed, ClassifiedRecord, FieldMap, FieldValue, QueryError, QueryEvent,
    QueryLogConfig, QueryLogError, QueryLogMetrics, QueryLogger, QueryLoggerBuilder, Result,
    Severity, Sink, SourceProbe, SqlProducer, ERROR_FIELD,
};
