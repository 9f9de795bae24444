//! Error types for the query logger
//!
//! Classification itself is infallible; errors here come from sinks and
//! from logger construction.

pub type Result<T> = std::result::Result<T, QueryLogError>;

#[derive(Debug, thiserror::Error)]
pub enum QueryLogError {
    /// IO error while writing to a sink
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Sink error (generic)
    #[error("Sink '{sink}' failed: {message}")]
    SinkError { sink: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl QueryLogError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        QueryLogError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink(sink: impl Into<String>, message: impl Into<String>) -> Self {
        QueryLogError::SinkError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        QueryLogError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = QueryLogError::config("QueryLoggerBuilder", "no sink configured");
        assert!(matches!(err, QueryLogError::InvalidConfiguration { .. }));

        let err = QueryLogError::sink("console", "stdout closed");
        assert!(matches!(err, QueryLogError::SinkError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = QueryLogError::config("QueryLoggerBuilder", "no sink configured");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for QueryLoggerBuilder: no sink configured"
        );

        let err = QueryLogError::sink("memory", "poisoned");
        assert_eq!(err.to_string(), "Sink 'memory' failed: poisoned");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: QueryLogError = io_err.into();
        assert!(matches!(err, QueryLogError::IoError(_)));
    }
}
