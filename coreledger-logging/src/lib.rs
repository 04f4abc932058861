//! Structured logging infrastructure for CoreLedger
//!
//! Installs one global `tracing` subscriber made of:
//! - a console layer in the configured format
//! - an optional rolling JSON file layer behind a non-blocking writer
//!
//! `RUST_LOG` takes precedence over the configured level.

pub mod error;
pub mod init;

// Re-export main types for convenience
pub use error::LoggingError;
pub use init::{build_env_filter, init_logging, LoggingGuard};
