//! Classification metrics for observability
//!
//! Counters for monitoring the classifier's decisions and sink health:
//! how many events surfaced at each severity class, how many were
//! suppressed, and how often sinks failed to accept a record.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for query-log observability
///
/// # Example
///
/// ```
/// use querylog::QueryLogMetrics;
///
/// let metrics = QueryLogMetrics::new();
///
/// metrics.record_suppressed();
/// metrics.record_warning();
///
/// assert_eq!(metrics.suppressed_count(), 1);
/// assert_eq!(metrics.warning_count(), 1);
/// ```
#[derive(Debug)]
pub struct QueryLogMetrics {
    /// Events that surfaced at Error severity
    errors: AtomicU64,

    /// Events that surfaced at Warn severity (slow queries)
    warnings: AtomicU64,

    /// Events that surfaced at Debug severity (verbose mode)
    debug: AtomicU64,

    /// Events classified as Suppressed and never forwarded
    suppressed: AtomicU64,

    /// Records a sink refused or failed to write
    sink_failures: AtomicU64,
}

impl QueryLogMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            errors: AtomicU64::new(0),
            warnings: AtomicU64::new(0),
            debug: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn error_count(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn warning_count(&self) -> u64 {
        self.warnings.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn debug_count(&self) -> u64 {
        self.debug.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failure_count(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    /// Total events that produced an emitted record
    pub fn emitted_count(&self) -> u64 {
        self.error_count() + self.warning_count() + self.debug_count()
    }

    #[inline]
    pub fn record_error(&self) -> u64 {
        self.errors.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_warning(&self) -> u64 {
        self.warnings.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_debug(&self) -> u64 {
        self.debug.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Fraction of classified events that were suppressed, as a percentage
    /// (0.0 - 100.0). Returns 0.0 before any event has been classified.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed_count() as f64;
        let total = self.emitted_count() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.errors.store(0, Ordering::Relaxed);
        self.warnings.store(0, Ordering::Relaxed);
        self.debug.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for QueryLogMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for QueryLogMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            errors: AtomicU64::new(self.error_count()),
            warnings: AtomicU64::new(self.warning_count()),
            debug: AtomicU64::new(self.debug_count()),
            suppressed: AtomicU64::new(self.suppressed_count()),
            sink_failures: AtomicU64::new(self.sink_failure_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = QueryLogMetrics::new();
        assert_eq!(metrics.error_count(), 0);
        assert_eq!(metrics.warning_count(), 0);
        assert_eq!(metrics.debug_count(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
        assert_eq!(metrics.sink_failure_count(), 0);
    }

    #[test]
    fn test_metrics_counters() {
        let metrics = QueryLogMetrics::new();
        assert_eq!(metrics.record_error(), 0); // Returns previous value
        metrics.record_error();
        metrics.record_warning();
        metrics.record_suppressed();

        assert_eq!(metrics.error_count(), 2);
        assert_eq!(metrics.warning_count(), 1);
        assert_eq!(metrics.emitted_count(), 3);
        assert_eq!(metrics.suppressed_count(), 1);
    }

    #[test]
    fn test_suppression_rate() {
        let metrics = QueryLogMetrics::new();
        assert_eq!(metrics.suppression_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_suppressed();
        }
        for _ in 0..10 {
            metrics.record_debug();
        }

        let rate = metrics.suppression_rate();
        assert!((89.9..=90.1).contains(&rate), "Suppression rate was {}", rate);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = QueryLogMetrics::new();
        metrics.record_error();
        metrics.record_suppressed();
        metrics.record_sink_failure();

        metrics.reset();

        assert_eq!(metrics.error_count(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
        assert_eq!(metrics.sink_failure_count(), 0);
    }

    #[test]
    fn test_metrics_clone_snapshot() {
        let metrics = QueryLogMetrics::new();
        metrics.record_warning();

        let snapshot = metrics.clone();
        metrics.record_warning();

        assert_eq!(metrics.warning_count(), 2);
        assert_eq!(snapshot.warning_count(), 1);
    }
}
