pub mod account_repository;
pub mod account_type_repository;
pub mod todo_repository;

pub use account_repository::SeaOrmAccountRepository;
pub use account_type_repository::SeaOrmAccountTypeRepository;
pub use todo_repository::SeaOrmToDoRepository;

use crate::seaorm::connection::DatabaseConnection;
use async_trait::async_trait;
use coreledger_core::FaultResult;
use coreledger_interfaces::{
    AccountRepository, AccountTypeRepository, HealthCheck, RepositoryFactory as RepositoryFactoryTrait,
    ToDoRepository,
};
use std::sync::Arc;

/// Repository factory for creating all repositories with shared connection
#[derive(Clone)]
pub struct RepositoryFactory {
    account_repo: Arc<SeaOrmAccountRepository>,
    account_type_repo: Arc<SeaOrmAccountTypeRepository>,
    todo_repo: Arc<SeaOrmToDoRepository>,
    db: DatabaseConnection,
}

impl RepositoryFactory {
    /// Create a new repository factory with shared database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            account_repo: Arc::new(SeaOrmAccountRepository::new(db.clone())),
            account_type_repo: Arc::new(SeaOrmAccountTypeRepository::new(db.clone())),
            todo_repo: Arc::new(SeaOrmToDoRepository::new(db.clone())),
            db,
        }
    }

    /// Get the database connection
    pub fn database(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl RepositoryFactoryTrait for RepositoryFactory {
    fn account_repository(&self) -> Arc<dyn AccountRepository> {
        self.account_repo.clone()
    }

    fn account_type_repository(&self) -> Arc<dyn AccountTypeRepository> {
        self.account_type_repo.clone()
    }

    fn todo_repository(&self) -> Arc<dyn ToDoRepository> {
        self.todo_repo.clone()
    }

    async fn health_check(&self) -> FaultResult<()> {
        self.db.health_check().await
    }
}
