//! Domain-driven configuration management for CoreLedger
//!
//! Configuration is split by functional domain, each with its own defaults
//! and validation. Values come from a YAML file and can be overridden by
//! `CORELEDGER_*` environment variables.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;

// Re-export domain configurations
pub use domains::{
    database::DatabaseConfig,
    logging::{FileLogConfig, LogFormat, LogLevel, LogRotation, LoggingConfig},
    server::ServerConfig,
    CoreLedgerConfig, Environment,
};

// Re-export utilities
pub use domains::utils::serde_duration;
