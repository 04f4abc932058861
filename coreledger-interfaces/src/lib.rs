//! # CoreLedger Interfaces
//!
//! Repository traits that let the REST handlers depend on contracts rather
//! than on the storage implementation. Storage crates implement them, tests
//! substitute the mocks from [`testing`].

pub mod database;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use database::{AccountRepository, AccountTypeRepository, HealthCheck, RepositoryFactory, ToDoRepository};
