//! CoreLedger server
//!
//! Wires configuration, logging, storage and the REST application together
//! and runs them behind a TCP listener with graceful shutdown.

pub mod startup;

// Re-export main components
pub use startup::*;
