//! SeaORM implementation of the CoreLedger storage layer
//!
//! Entities, migrations, the account query builder, repositories and
//! connection management.

pub mod config;
pub mod connection;
pub mod entities;
pub mod filters;
pub mod migrations;
pub mod repositories;

pub use config::DatabaseConfig;
pub use connection::{DatabaseConnection, DatabaseError};
pub use filters::AccountQueryBuilder;
pub use repositories::{
    RepositoryFactory, SeaOrmAccountRepository, SeaOrmAccountTypeRepository, SeaOrmToDoRepository,
};

// Re-export common SeaORM types for convenience
pub use sea_orm::{DatabaseConnection as SeaOrmConnection, EntityTrait};
pub use sea_orm_migration::MigratorTrait;
