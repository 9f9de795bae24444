//! Query-completion events and their outcome taxonomy

use chrono::{DateTime, Utc};
use std::fmt;

/// Outcome of a query execution that did not succeed cleanly.
///
/// `NotFound` is the expected, suppressible class ("no rows matched a point
/// lookup"); everything else is `Execution` and always surfaces at error
/// severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("record not found")]
    NotFound,

    #[error("{0}")]
    Execution(String),
}

impl QueryError {
    /// Build an execution error from anything displayable
    pub fn execution(err: impl fmt::Display) -> Self {
        QueryError::Execution(err.to_string())
    }

    /// Recognizer for the suppressible "record not found" outcome class
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::NotFound)
    }
}

/// Producer of `(sql, rows_affected)`, evaluated exactly once per event.
///
/// Deferring the SQL rendering keeps suppressed events cheap: the text is
/// only built when classification actually runs. `rows_affected` is `-1`
/// when the driver cannot tell.
pub type SqlProducer = Box<dyn FnOnce() -> (String, i64) + Send>;

/// A single completed database statement execution, with timing and outcome.
///
/// Built by the caller at query completion and consumed by
/// [`classify`](crate::core::classifier::classify).
pub struct QueryEvent {
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) producer: SqlProducer,
    pub(crate) outcome: Option<QueryError>,
}

impl QueryEvent {
    /// Create an event for a query that started at `started_at`.
    pub fn new<P>(started_at: DateTime<Utc>, producer: P) -> Self
    where
        P: FnOnce() -> (String, i64) + Send + 'static,
    {
        Self {
            started_at,
            producer: Box::new(producer),
            outcome: None,
        }
    }

    /// Convenience constructor for an already-rendered statement.
    pub fn from_sql(started_at: DateTime<Utc>, sql: impl Into<String>) -> Self {
        let sql = sql.into();
        Self::new(started_at, move || (sql, -1))
    }

    /// Attach the execution outcome.
    pub fn with_outcome(mut self, outcome: QueryError) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn outcome(&self) -> Option<&QueryError> {
        self.outcome.as_ref()
    }
}

impl fmt::Debug for QueryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryEvent")
            .field("started_at", &self.started_at)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_recognizer() {
        assert!(QueryError::NotFound.is_not_found());
        assert!(!QueryError::execution("connection reset").is_not_found());
    }

    #[test]
    fn test_execution_error_display() {
        let err = QueryError::execution("deadlock detected");
        assert_eq!(err.to_string(), "deadlock detected");
        assert_eq!(QueryError::NotFound.to_string(), "record not found");
    }

    #[test]
    fn test_event_construction() {
        let started = Utc::now();
        let event = QueryEvent::from_sql(started, "SELECT 1").with_outcome(QueryError::NotFound);

        assert_eq!(event.started_at(), started);
        assert_eq!(event.outcome(), Some(&QueryError::NotFound));

        let (sql, rows) = (event.producer)();
        assert_eq!(sql, "SELECT 1");
        assert_eq!(rows, -1);
    }
}
