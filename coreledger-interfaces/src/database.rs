//! Database repository interfaces
//!
//! Every method reports failures as a [`ClassifiedFault`]; storage errors
//! arrive already wrapped as `Unclassified`.

use async_trait::async_trait;
use std::sync::Arc;

use coreledger_api_types::{AccountsByTypeReportDto, Page};
use coreledger_core::{Account, AccountType, FaultResult, QuerySpec, ToDo};

/// Liveness of a backing store
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn health_check(&self) -> FaultResult<()>;
}

/// Account persistence
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by id, with its type description populated
    async fn find_by_id(&self, id: i32) -> FaultResult<Option<Account>>;

    async fn find_by_code(&self, code: i64) -> FaultResult<Option<Account>>;

    /// One filtered, sorted page plus the total number of matching rows
    async fn find_page(&self, spec: &QuerySpec) -> FaultResult<Page<Account>>;

    /// Insert a new account and return it with its assigned id
    async fn create(&self, account: Account) -> FaultResult<Account>;

    async fn update(&self, account: Account) -> FaultResult<Account>;

    /// Returns false when no row with `id` existed
    async fn delete(&self, id: i32) -> FaultResult<bool>;

    /// Active account count per account type, ordered by type description
    async fn active_counts_by_type(&self) -> FaultResult<Vec<AccountsByTypeReportDto>>;
}

/// Account type persistence
#[async_trait]
pub trait AccountTypeRepository: Send + Sync {
    async fn find_all(&self) -> FaultResult<Vec<AccountType>>;

    async fn find_by_id(&self, id: i32) -> FaultResult<Option<AccountType>>;

    /// Case-insensitive lookup used for uniqueness checks
    async fn find_by_description(&self, description: &str) -> FaultResult<Option<AccountType>>;

    async fn create(&self, account_type: AccountType) -> FaultResult<AccountType>;

    async fn update(&self, account_type: AccountType) -> FaultResult<AccountType>;

    async fn delete(&self, id: i32) -> FaultResult<bool>;
}

/// ToDo persistence
#[async_trait]
pub trait ToDoRepository: Send + Sync {
    /// All items, newest first
    async fn find_all(&self) -> FaultResult<Vec<ToDo>>;

    async fn find_by_id(&self, id: i32) -> FaultResult<Option<ToDo>>;

    async fn create(&self, todo: ToDo) -> FaultResult<ToDo>;

    async fn update(&self, todo: ToDo) -> FaultResult<ToDo>;

    async fn delete(&self, id: i32) -> FaultResult<bool>;
}

/// Repository factory for dependency injection
#[async_trait]
pub trait RepositoryFactory: Send + Sync {
    fn account_repository(&self) -> Arc<dyn AccountRepository>;

    fn account_type_repository(&self) -> Arc<dyn AccountTypeRepository>;

    fn todo_repository(&self) -> Arc<dyn ToDoRepository>;

    /// Check health of the underlying store
    async fn health_check(&self) -> FaultResult<()>;
}
