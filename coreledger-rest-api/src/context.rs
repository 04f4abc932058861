//! Context types for dependency injection in REST API handlers
//!
//! Each endpoint group gets its own context so handlers only see the
//! dependencies they use. [`AppContext`](crate::AppContext) combines them and
//! hands each one out through `FromRef`.

use coreledger_interfaces::{HealthCheck, RepositoryFactory};
use std::sync::Arc;

/// Context for account endpoints
///
/// Account writes check the account type, so the whole factory is held.
#[derive(Clone)]
pub struct AccountsContext {
    pub repositories: Arc<dyn RepositoryFactory>,
}

impl AccountsContext {
    pub fn new(repositories: Arc<dyn RepositoryFactory>) -> Self {
        Self { repositories }
    }
}

/// Context for account type endpoints
#[derive(Clone)]
pub struct AccountTypesContext {
    pub repositories: Arc<dyn RepositoryFactory>,
}

impl AccountTypesContext {
    pub fn new(repositories: Arc<dyn RepositoryFactory>) -> Self {
        Self { repositories }
    }
}

/// Context for to-do endpoints
#[derive(Clone)]
pub struct ToDosContext {
    pub repositories: Arc<dyn RepositoryFactory>,
}

impl ToDosContext {
    pub fn new(repositories: Arc<dyn RepositoryFactory>) -> Self {
        Self { repositories }
    }
}

/// Context for readiness probing
#[derive(Clone)]
pub struct HealthContext {
    pub database: Arc<dyn HealthCheck>,
}

impl HealthContext {
    pub fn new(database: Arc<dyn HealthCheck>) -> Self {
        Self { database }
    }
}
