//! Severity classification for completed query events
//!
//! This is the decision logic of the crate: an ordered decision list over
//! the event's outcome, elapsed time, and the configured verbosity.
//! Errors always surface first, slow executions warn even without an error,
//! and everything else is opt-in debug noise.

use super::config::QueryLogConfig;
use super::elapsed::format_elapsed;
use super::event::QueryEvent;
use super::fields::FieldMap;
use super::record::ClassifiedRecord;
use super::severity::Severity;
use chrono::{DateTime, Utc};

/// Key under which a surfaced outcome is attached to the field map.
pub const ERROR_FIELD: &str = "error";

/// Classify a completed query event into a record.
///
/// First matching branch wins:
///
/// 1. non-suppressed error outcome → [`Severity::Error`], `error` field set
/// 2. `slow_threshold > 0` and `elapsed > slow_threshold` → [`Severity::Warn`]
/// 3. `config.verbose` → [`Severity::Debug`]
/// 4. otherwise → [`Severity::Suppressed`]
///
/// A `NotFound` outcome with `suppress_not_found` enabled skips branch 1 but
/// still participates in the slow and verbose branches, so a slow not-found
/// lookup warns.
///
/// The SQL producer runs exactly once; `source_probe` runs only when
/// `config.source_field` is non-empty. Classification itself cannot fail.
pub fn classify<P>(
    config: &QueryLogConfig,
    event: QueryEvent,
    now: DateTime<Utc>,
    source_probe: P,
) -> ClassifiedRecord
where
    P: FnOnce() -> String,
{
    let QueryEvent {
        started_at,
        producer,
        outcome,
    } = event;

    // A clock that went backward clamps elapsed to zero.
    let elapsed = (now - started_at).to_std().unwrap_or_default();
    let (sql, _rows) = producer();

    let mut fields = FieldMap::new();
    if !config.source_field.is_empty() {
        fields.add_field(config.source_field.clone(), source_probe());
    }

    let message = format!("{} [{}]", sql, format_elapsed(elapsed));

    let surfaced = outcome.filter(|err| !(err.is_not_found() && config.suppress_not_found));
    let severity = if let Some(err) = surfaced {
        fields.add_field(ERROR_FIELD, err.to_string());
        Severity::Error
    } else if !config.slow_threshold.is_zero() && elapsed > config.slow_threshold {
        Severity::Warn
    } else if config.verbose {
        Severity::Debug
    } else {
        Severity::Suppressed
    };

    ClassifiedRecord::new(severity, message, fields, now)
}
