//! Conversions from domain entities to wire types

use coreledger_core::{Account, AccountType, ToDo};

use crate::domain::{AccountDto, AccountTypeDto, ToDoDto};

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            code: account.code,
            name: account.name.clone(),
            type_id: account.type_id,
            type_description: account.type_description.clone().unwrap_or_default(),
            status: account.status.ordinal(),
            status_description: account.status.to_string(),
            normal_balance: account.normal_balance.ordinal(),
            normal_balance_description: account.normal_balance.to_string(),
            created_at: account.created_at,
            updated_at: account.updated_at,
            deactivated_at: account.deactivated_at,
        }
    }
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        Self::from(&account)
    }
}

impl From<AccountType> for AccountTypeDto {
    fn from(account_type: AccountType) -> Self {
        Self {
            id: account_type.id,
            description: account_type.description,
            created_at: account_type.created_at,
            updated_at: account_type.updated_at,
        }
    }
}

impl From<ToDo> for ToDoDto {
    fn from(todo: ToDo) -> Self {
        Self {
            id: todo.id,
            description: todo.description,
            is_completed: todo.is_completed,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
            completed_at: todo.completed_at,
        }
    }
}
