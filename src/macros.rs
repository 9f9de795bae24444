//! Pass-through logging macros with automatic message formatting.
//!
//! These cover the plain-text surface of the logger (messages that are not
//! query events), similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use querylog::prelude::*;
//! use querylog::info;
//!
//! let logger = QueryLogger::builder().sink(MemorySink::new()).build().unwrap();
//!
//! info!(logger, "connection pool ready");
//!
//! let pool_size = 16;
//! info!(logger, "pool initialized with {} connections", pool_size);
//! ```

/// Log a plain message at an explicit severity.
///
/// # Examples
///
/// ```
/// # use querylog::prelude::*;
/// # let logger = QueryLogger::builder().sink(MemorySink::new()).build().unwrap();
/// use querylog::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}
