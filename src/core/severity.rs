//! Severity definitions for classified query events

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity assigned to a query-completion event.
///
/// Ordered by priority: `Error > Warn > Info > Debug > Suppressed`.
/// Classification never produces `Info`; it exists for the plain
/// pass-through logging surface of [`QueryLogger`](crate::QueryLogger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    /// No record is emitted for this event.
    #[default]
    Suppressed = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Suppressed => "SUPPRESSED",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Whether a record at this severity is forwarded to sinks at all.
    pub fn is_emitting(&self) -> bool {
        !matches!(self, Severity::Suppressed)
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Suppressed => BrightBlack,
            Severity::Debug => Blue,
            Severity::Info => Green,
            Severity::Warn => Yellow,
            Severity::Error => Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SUPPRESSED" => Ok(Severity::Suppressed),
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
