//! Mock implementations for testing
//!
//! Mock repositories built with the mockall framework, for injecting faults
//! and canned data into handlers without a database.

use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;

use coreledger_api_types::{AccountsByTypeReportDto, Page};
use coreledger_core::{Account, AccountType, FaultResult, QuerySpec, ToDo};

use crate::database::{AccountRepository, AccountTypeRepository, HealthCheck, RepositoryFactory, ToDoRepository};

mock! {
    pub AccountRepo {}

    #[async_trait]
    impl AccountRepository for AccountRepo {
        async fn find_by_id(&self, id: i32) -> FaultResult<Option<Account>>;
        async fn find_by_code(&self, code: i64) -> FaultResult<Option<Account>>;
        async fn find_page(&self, spec: &QuerySpec) -> FaultResult<Page<Account>>;
        async fn create(&self, account: Account) -> FaultResult<Account>;
        async fn update(&self, account: Account) -> FaultResult<Account>;
        async fn delete(&self, id: i32) -> FaultResult<bool>;
        async fn active_counts_by_type(&self) -> FaultResult<Vec<AccountsByTypeReportDto>>;
    }
}

mock! {
    pub AccountTypeRepo {}

    #[async_trait]
    impl AccountTypeRepository for AccountTypeRepo {
        async fn find_all(&self) -> FaultResult<Vec<AccountType>>;
        async fn find_by_id(&self, id: i32) -> FaultResult<Option<AccountType>>;
        async fn find_by_description(&self, description: &str) -> FaultResult<Option<AccountType>>;
        async fn create(&self, account_type: AccountType) -> FaultResult<AccountType>;
        async fn update(&self, account_type: AccountType) -> FaultResult<AccountType>;
        async fn delete(&self, id: i32) -> FaultResult<bool>;
    }
}

mock! {
    pub ToDoRepo {}

    #[async_trait]
    impl ToDoRepository for ToDoRepo {
        async fn find_all(&self) -> FaultResult<Vec<ToDo>>;
        async fn find_by_id(&self, id: i32) -> FaultResult<Option<ToDo>>;
        async fn create(&self, todo: ToDo) -> FaultResult<ToDo>;
        async fn update(&self, todo: ToDo) -> FaultResult<ToDo>;
        async fn delete(&self, id: i32) -> FaultResult<bool>;
    }
}

mock! {
    pub Health {}

    #[async_trait]
    impl HealthCheck for Health {
        async fn health_check(&self) -> FaultResult<()>;
    }
}

/// Factory handing out whichever mocks a test configured
pub struct MockRepositoryFactory {
    pub accounts: Arc<dyn AccountRepository>,
    pub account_types: Arc<dyn AccountTypeRepository>,
    pub todos: Arc<dyn ToDoRepository>,
}

impl Default for MockRepositoryFactory {
    fn default() -> Self {
        Self {
            accounts: Arc::new(MockAccountRepo::new()),
            account_types: Arc::new(MockAccountTypeRepo::new()),
            todos: Arc::new(MockToDoRepo::new()),
        }
    }
}

impl MockRepositoryFactory {
    pub fn with_accounts(mut self, accounts: MockAccountRepo) -> Self {
        self.accounts = Arc::new(accounts);
        self
    }

    pub fn with_account_types(mut self, account_types: MockAccountTypeRepo) -> Self {
        self.account_types = Arc::new(account_types);
        self
    }

    pub fn with_todos(mut self, todos: MockToDoRepo) -> Self {
        self.todos = Arc::new(todos);
        self
    }
}

#[async_trait]
impl RepositoryFactory for MockRepositoryFactory {
    fn account_repository(&self) -> Arc<dyn AccountRepository> {
        self.accounts.clone()
    }

    fn account_type_repository(&self) -> Arc<dyn AccountTypeRepository> {
        self.account_types.clone()
    }

    fn todo_repository(&self) -> Arc<dyn ToDoRepository> {
        self.todos.clone()
    }

    async fn health_check(&self) -> FaultResult<()> {
        Ok(())
    }
}
