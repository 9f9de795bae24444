//! Sink implementations

#[cfg(feature = "console")]
pub mod console;
pub mod memory;

#[cfg(feature = "console")]
pub use console::ConsoleSink;
pub use memory::MemorySink;

// Re-export the trait alongside its implementations
pub use crate::core::Sink;
