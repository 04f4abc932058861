//! Ledger domain entities

pub mod account;
pub mod account_type;
pub mod enums;
pub mod todo;

pub use account::Account;
pub use account_type::AccountType;
pub use enums::{AccountStatus, NormalBalance};
pub use todo::ToDo;

use crate::error::{ClassifiedFault, FaultResult};

/// Trim a required text field and enforce its maximum length
pub(crate) fn required_text(value: &str, field: &str, max_len: usize) -> FaultResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClassifiedFault::validation(format!("{} cannot be empty", field)));
    }
    if trimmed.chars().count() > max_len {
        return Err(ClassifiedFault::validation(format!(
            "{} cannot exceed {} characters",
            field, max_len
        )));
    }
    Ok(trimmed.to_string())
}
