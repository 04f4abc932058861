//! Storage layer for CoreLedger
//!
//! SeaORM entities, migrations and repository implementations of the
//! `coreledger-interfaces` traits.

pub mod seaorm;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use seaorm::{DatabaseConfig, DatabaseConnection, DatabaseError, RepositoryFactory};
