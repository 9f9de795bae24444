//! Classified record produced for a query event

use super::fields::FieldMap;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The classifier's output for one query event: a severity, a message, and
/// the structured fields that accompany it.
///
/// A record with [`Severity::Suppressed`] carries the classification result
/// but is never forwarded to sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub severity: Severity,
    pub message: String,
    #[serde(flatten)]
    pub fields: FieldMap,
    pub timestamp: DateTime<Utc>,
}

impl ClassifiedRecord {
    /// Sanitize the message to prevent log injection attacks.
    ///
    /// SQL text is caller-controlled and may contain literal newlines;
    /// escaping them keeps one event on one output line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        fields: FieldMap,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            severity,
            message: Self::sanitize_message(&message.into()),
            fields,
            timestamp,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_sanitization() {
        let record = ClassifiedRecord::new(
            Severity::Error,
            "SELECT 1\nERROR fake injected line\t[0ms]",
            FieldMap::new(),
            Utc::now(),
        );

        assert!(!record.message.contains('\n'));
        assert!(!record.message.contains('\t'));
        assert!(record.message.contains("\\n"));
    }

    #[test]
    fn test_json_serialization() {
        let fields = FieldMap::new().with_field("error", "connection reset");
        let record = ClassifiedRecord::new(
            Severity::Error,
            "SELECT * FROM users [5ms]",
            fields,
            Utc::now(),
        );

        let json = record.to_json().unwrap();
        assert!(json.contains("SELECT * FROM users"));
        assert!(json.contains("connection reset"));
    }

    #[test]
    fn test_json_roundtrip() {
        let fields = FieldMap::new().with_field("source", "app/db.rs:42");
        let record = ClassifiedRecord::new(Severity::Warn, "SELECT 1 [250ms]", fields, Utc::now());

        let json = record.to_json().unwrap();
        let parsed = ClassifiedRecord::from_json(&json).unwrap();

        assert_eq!(parsed.severity, Severity::Warn);
        assert_eq!(parsed.message, "SELECT 1 [250ms]");
        assert!(parsed.fields.contains_key("source"));
    }
}
