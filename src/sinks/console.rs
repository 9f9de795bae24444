//! Console sink implementation

use crate::core::{ClassifiedRecord, Result, Severity, Sink};
use chrono::{DateTime, Utc};
use colored::Colorize;

/// Writes classified records as single-line text to the terminal.
///
/// Error records go to stderr, everything else to stdout. Structured
/// fields are appended as `key=value` pairs.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_severity(&self, severity: Severity) -> String {
        if self.use_colors {
            format!("{:5}", severity.to_str())
                .color(severity.color_code())
                .to_string()
        } else {
            format!("{:5}", severity.to_str())
        }
    }

    fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
        timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    fn write_line(severity: Severity, line: &str) {
        match severity {
            Severity::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn record(&mut self, record: &ClassifiedRecord) -> Result<()> {
        let base = format!(
            "[{}] [{}] {}",
            Self::format_timestamp(&record.timestamp),
            self.format_severity(record.severity),
            record.message
        );

        let line = if record.fields.is_empty() {
            base
        } else {
            format!("{} {}", base, record.fields.format_fields())
        };

        Self::write_line(record.severity, &line);
        Ok(())
    }

    fn log(&mut self, severity: Severity, message: &str) -> Result<()> {
        let line = format!(
            "[{}] [{}] {}",
            Self::format_timestamp(&Utc::now()),
            self.format_severity(severity),
            message
        );
        Self::write_line(severity, &line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
