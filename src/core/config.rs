//! Classifier configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for query-event classification.
///
/// Created once and read-only thereafter; a single config may be shared
/// across concurrently completing query events without locking.
///
/// # Example
///
/// ```
/// use querylog::QueryLogConfig;
/// use std::time::Duration;
///
/// let config = QueryLogConfig::new()
///     .with_suppress_not_found(true)
///     .with_slow_threshold(Duration::from_millis(200))
///     .with_source_field("source");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLogConfig {
    /// Demote "record not found" outcomes below error severity.
    pub suppress_not_found: bool,

    /// Emit Debug records for fast, successful executions.
    pub verbose: bool,

    /// Minimum elapsed time that triggers a Warn record even absent an
    /// error. Zero disables the slow path entirely. (Negative thresholds
    /// are unrepresentable: `Duration` is unsigned.)
    pub slow_threshold: Duration,

    /// Key under which the call-site location is attached. Empty means
    /// "attach no call-site field".
    pub source_field: String,
}

impl QueryLogConfig {
    pub fn new() -> Self {
        Self {
            suppress_not_found: false,
            verbose: false,
            slow_threshold: Duration::ZERO,
            source_field: String::new(),
        }
    }

    #[must_use]
    pub fn with_suppress_not_found(mut self, suppress: bool) -> Self {
        self.suppress_not_found = suppress;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_source_field(mut self, field: impl Into<String>) -> Self {
        self.source_field = field.into();
        self
    }
}

impl Default for QueryLogConfig {
    fn default() -> Self {
        Self::new()
    }
}
