//! Database testing utilities
//!
//! In-memory databases with migrations applied, plus seeding helpers for
//! listing scenarios.

use coreledger_core::{Account, AccountStatus, AccountType, NormalBalance};
use coreledger_interfaces::{AccountRepository, AccountTypeRepository};

use crate::seaorm::{DatabaseConfig, DatabaseConnection, SeaOrmAccountRepository, SeaOrmAccountTypeRepository};

/// First code handed out by [`seed_accounts`]
pub const SEED_FIRST_CODE: i64 = 1000;

/// Create a migrated single-connection in-memory database
pub async fn create_test_db() -> DatabaseConnection {
    let db = DatabaseConnection::new(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    db
}

/// Seed an "Assets" account type and `count` accounts
///
/// Codes run from [`SEED_FIRST_CODE`] upwards and every tenth account is
/// inactive. Returns the account type id.
pub async fn seed_accounts(db: &DatabaseConnection, count: usize) -> i32 {
    let account_type = SeaOrmAccountTypeRepository::new(db.clone())
        .create(AccountType::create("Assets").expect("valid account type"))
        .await
        .expect("Failed to seed account type");

    let accounts = SeaOrmAccountRepository::new(db.clone());
    for index in 0..count {
        let status = if index % 10 == 9 {
            AccountStatus::Inactive
        } else {
            AccountStatus::Active
        };
        let normal_balance = if index % 2 == 0 {
            NormalBalance::Debit
        } else {
            NormalBalance::Credit
        };
        let code = SEED_FIRST_CODE + index as i64;
        let account = Account::create(code, &format!("Account {}", code), account_type.id, status, normal_balance)
            .expect("valid account");
        accounts.create(account).await.expect("Failed to seed account");
    }

    account_type.id
}
