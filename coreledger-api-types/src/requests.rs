//! Request bodies with field-level validation rules
//!
//! Missing fields deserialize to their defaults so that the rules below
//! report them per field instead of failing JSON parsing as a whole.

use coreledger_core::entities::account::{MAX_ACCOUNT_CODE, MAX_ACCOUNT_NAME_LEN};
use coreledger_core::entities::account_type::MAX_ACCOUNT_TYPE_DESCRIPTION_LEN;
use coreledger_core::entities::todo::MAX_TODO_DESCRIPTION_LEN;
use coreledger_core::{AccountStatus, NormalBalance};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAccountRequest {
    #[validate(custom(function = "rules::validate_account_code"))]
    pub code: i64,

    #[validate(
        custom(function = "rules::validate_name_required"),
        length(max = 200, message = "Name cannot exceed 200 characters")
    )]
    pub name: String,

    #[validate(range(min = 1, message = "TypeId must be a valid positive identifier"))]
    pub type_id: i32,

    #[validate(custom(function = "rules::validate_account_status"))]
    pub status: i32,

    #[validate(custom(function = "rules::validate_normal_balance"))]
    pub normal_balance: i32,
}

/// Same shape and rules as account creation
pub type UpdateAccountRequest = CreateAccountRequest;

impl CreateAccountRequest {
    /// Typed status; only meaningful after validation succeeded
    pub fn account_status(&self) -> Option<AccountStatus> {
        AccountStatus::from_ordinal(self.status)
    }

    pub fn account_normal_balance(&self) -> Option<NormalBalance> {
        NormalBalance::from_ordinal(self.normal_balance)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAccountTypeRequest {
    #[validate(
        custom(function = "rules::validate_description_required"),
        length(max = 100, message = "Description cannot exceed 100 characters")
    )]
    pub description: String,
}

pub type UpdateAccountTypeRequest = CreateAccountTypeRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateToDoRequest {
    #[validate(
        custom(function = "rules::validate_description_required"),
        length(max = 500, message = "Description cannot exceed 500 characters")
    )]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateToDoRequest {
    #[validate(
        custom(function = "rules::validate_description_required"),
        length(max = 500, message = "Description cannot exceed 500 characters")
    )]
    pub description: String,

    pub is_completed: bool,
}

// Keep literal limits in the derive attributes in step with the domain
const _: () = assert!(MAX_ACCOUNT_NAME_LEN == 200);
const _: () = assert!(MAX_ACCOUNT_TYPE_DESCRIPTION_LEN == 100);
const _: () = assert!(MAX_TODO_DESCRIPTION_LEN == 500);

/// Common validation rules
pub mod rules {
    use super::*;
    use std::borrow::Cow;
    use validator::ValidationError;

    fn rule(code: &'static str, message: &'static str) -> ValidationError {
        ValidationError::new(code).with_message(Cow::Borrowed(message))
    }

    // Empty or whitespace-only text counts as missing
    pub fn validate_name_required(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(rule("required", "Name is required"));
        }
        Ok(())
    }

    pub fn validate_description_required(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(rule("required", "Description is required"));
        }
        Ok(())
    }

    pub fn validate_account_code(code: i64) -> Result<(), ValidationError> {
        if code <= 0 {
            return Err(rule("range", "Code must be a positive number"));
        }
        if code > MAX_ACCOUNT_CODE {
            return Err(rule("range", "Code cannot exceed 10 digits"));
        }
        Ok(())
    }

    pub fn validate_account_status(status: i32) -> Result<(), ValidationError> {
        AccountStatus::from_ordinal(status)
            .map(|_| ())
            .ok_or_else(|| rule("enum", "Status must be a valid AccountStatus value"))
    }

    pub fn validate_normal_balance(normal_balance: i32) -> Result<(), ValidationError> {
        NormalBalance::from_ordinal(normal_balance)
            .map(|_| ())
            .ok_or_else(|| rule("enum", "NormalBalance must be a valid NormalBalance value"))
    }
}
