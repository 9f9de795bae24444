//! Main query logger implementation

use super::{
    classifier::classify,
    config::QueryLogConfig,
    error::{QueryLogError, Result},
    event::QueryEvent,
    metrics::QueryLogMetrics,
    severity::Severity,
    sink::Sink,
};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::panic::Location;
use std::sync::Arc;

/// Custom call-site probe, invoked only when a source field is configured.
pub type SourceProbe = Arc<dyn Fn() -> String + Send + Sync>;

/// Classifies completed query events and dispatches the resulting records
/// to its sinks.
///
/// One logger may serve concurrently completing query events: the
/// configuration is read-only, metrics are atomic, and sink access is
/// serialized through a lock. Dispatch is inline and synchronous; there is
/// no queue and no batching.
pub struct QueryLogger {
    config: QueryLogConfig,
    sinks: Arc<RwLock<Vec<Box<dyn Sink>>>>,
    metrics: Arc<QueryLogMetrics>,
    source_probe: Option<SourceProbe>,
}

impl QueryLogger {
    /// Create a builder for QueryLogger
    ///
    /// # Example
    /// ```
    /// use querylog::prelude::*;
    ///
    /// let logger = QueryLogger::builder()
    ///     .config(QueryLogConfig::new().with_verbose(true))
    ///     .sink(MemorySink::new())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> QueryLoggerBuilder {
        QueryLoggerBuilder::new()
    }

    pub fn config(&self) -> &QueryLogConfig {
        &self.config
    }

    /// Get the logger metrics for observability
    pub fn metrics(&self) -> &QueryLogMetrics {
        &self.metrics
    }

    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.write().push(sink);
    }

    /// Classify a completed query event and dispatch the record.
    ///
    /// The default call-site probe reports the file and line of the caller
    /// of this method, unless a custom probe was installed at build time.
    #[track_caller]
    pub fn trace(&self, event: QueryEvent) {
        let caller = Location::caller();
        self.trace_with_caller(event, Utc::now(), caller);
    }

    /// Deterministic variant of [`trace`](Self::trace) taking an explicit
    /// `now`, for embedders and tests that manage their own clock.
    #[track_caller]
    pub fn trace_at(&self, event: QueryEvent, now: DateTime<Utc>) {
        let caller = Location::caller();
        self.trace_with_caller(event, now, caller);
    }

    fn trace_with_caller(&self, event: QueryEvent, now: DateTime<Utc>, caller: &Location<'_>) {
        let record = match &self.source_probe {
            Some(probe) => classify(&self.config, event, now, || probe()),
            None => classify(&self.config, event, now, || {
                format!("{}:{}", caller.file(), caller.line())
            }),
        };

        if !record.severity.is_emitting() {
            self.metrics.record_suppressed();
            return;
        }

        match record.severity {
            Severity::Error => self.metrics.record_error(),
            Severity::Warn => self.metrics.record_warning(),
            _ => self.metrics.record_debug(),
        };

        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            // One failing sink must not starve the others
            if let Err(e) = sink.record(&record) {
                eprintln!("[QUERYLOG ERROR] Sink '{}' failed: {}", sink.name(), e);
                self.metrics.record_sink_failure();
            }
        }
    }

    /// Forward a plain message to every sink, bypassing classification.
    ///
    /// A [`Severity::Suppressed`] message is discarded, matching how
    /// suppressed classified records are never forwarded.
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        if !severity.is_emitting() {
            return;
        }
        let message = message.into();
        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            if let Err(e) = sink.log(severity, &message) {
                eprintln!("[QUERYLOG ERROR] Sink '{}' failed: {}", sink.name(), e);
                self.metrics.record_sink_failure();
            }
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Severity::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}

/// Builder for constructing QueryLogger with a fluent API
///
/// At least one sink is required; there is no hidden default sink.
///
/// # Example
/// ```
/// use querylog::prelude::*;
/// use std::time::Duration;
///
/// let logger = QueryLogger::builder()
///     .config(
///         QueryLogConfig::new()
///             .with_suppress_not_found(true)
///             .with_slow_threshold(Duration::from_millis(200)),
///     )
///     .sink(MemorySink::new())
///     .build()
///     .unwrap();
/// ```
pub struct QueryLoggerBuilder {
    config: QueryLogConfig,
    sinks: Vec<Box<dyn Sink>>,
    source_probe: Option<SourceProbe>,
}

impl QueryLoggerBuilder {
    /// Create a new builder with default configuration and no sinks
    pub fn new() -> Self {
        Self {
            config: QueryLogConfig::default(),
            sinks: Vec::new(),
            source_probe: None,
        }
    }

    /// Set the classification configuration
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: QueryLogConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Install a custom call-site probe, replacing the default
    /// caller-location probe.
    #[must_use = "builder methods return a new value"]
    pub fn source_probe(mut self, probe: SourceProbe) -> Self {
        self.source_probe = Some(probe);
        self
    }

    /// Build the QueryLogger.
    ///
    /// Fails with [`QueryLogError::InvalidConfiguration`] when no sink has
    /// been added.
    pub fn build(self) -> Result<QueryLogger> {
        if self.sinks.is_empty() {
            return Err(QueryLogError::config(
                "QueryLoggerBuilder",
                "at least one sink is required",
            ));
        }

        Ok(QueryLogger {
            config: self.config,
            sinks: Arc::new(RwLock::new(self.sinks)),
            metrics: Arc::new(QueryLogMetrics::new()),
            source_probe: self.source_probe,
        })
    }
}

impl Default for QueryLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
