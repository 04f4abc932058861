use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{required_text, AccountStatus, NormalBalance};
use crate::error::{ClassifiedFault, FaultResult};

/// Largest code an account may carry (ten digits)
pub const MAX_ACCOUNT_CODE: i64 = 9_999_999_999;

/// Maximum length of an account name
pub const MAX_ACCOUNT_NAME_LEN: usize = 200;

/// A ledger account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Storage identifier, 0 until persisted
    pub id: i32,
    pub code: i64,
    pub name: String,
    pub type_id: i32,
    /// Description of the related account type, populated when loaded with it
    pub type_description: Option<String>,
    pub status: AccountStatus,
    pub normal_balance: NormalBalance,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deactivated_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Create a new, not yet persisted account
    pub fn create(
        code: i64,
        name: &str,
        type_id: i32,
        status: AccountStatus,
        normal_balance: NormalBalance,
    ) -> FaultResult<Self> {
        validate_code(code)?;
        let name = required_text(name, "Name", MAX_ACCOUNT_NAME_LEN)?;
        let now = Utc::now();

        Ok(Self {
            id: 0,
            code,
            name,
            type_id,
            type_description: None,
            status,
            normal_balance,
            created_at: now,
            updated_at: None,
            deactivated_at: (status == AccountStatus::Inactive).then_some(now),
        })
    }

    /// Replace the mutable attributes of the account
    pub fn update(
        &mut self,
        code: i64,
        name: &str,
        type_id: i32,
        status: AccountStatus,
        normal_balance: NormalBalance,
    ) -> FaultResult<()> {
        validate_code(code)?;
        let name = required_text(name, "Name", MAX_ACCOUNT_NAME_LEN)?;
        let now = Utc::now();

        if type_id != self.type_id {
            self.type_description = None;
        }
        match (self.status, status) {
            (AccountStatus::Active, AccountStatus::Inactive) => self.deactivated_at = Some(now),
            (AccountStatus::Inactive, AccountStatus::Active) => self.deactivated_at = None,
            _ => {}
        }

        self.code = code;
        self.name = name;
        self.type_id = type_id;
        self.status = status;
        self.normal_balance = normal_balance;
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn activate(&mut self) -> FaultResult<()> {
        if self.status == AccountStatus::Active {
            return Err(ClassifiedFault::validation("Account is already active"));
        }
        self.status = AccountStatus::Active;
        self.deactivated_at = None;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    pub fn deactivate(&mut self) -> FaultResult<()> {
        if self.status == AccountStatus::Inactive {
            return Err(ClassifiedFault::validation("Account is already inactive"));
        }
        let now = Utc::now();
        self.status = AccountStatus::Inactive;
        self.deactivated_at = Some(now);
        self.updated_at = Some(now);
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

fn validate_code(code: i64) -> FaultResult<()> {
    if code <= 0 {
        return Err(ClassifiedFault::validation("Code must be a positive number"));
    }
    if code > MAX_ACCOUNT_CODE {
        return Err(ClassifiedFault::validation("Code cannot exceed 10 digits"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes;

    fn sample() -> Account {
        Account::create(1000, "  Cash  ", 1, AccountStatus::Active, NormalBalance::Debit).unwrap()
    }

    #[test]
    fn test_create_trims_name() {
        let account = sample();
        assert_eq!(account.name, "Cash");
        assert_eq!(account.id, 0);
        assert!(account.updated_at.is_none());
        assert!(account.deactivated_at.is_none());
    }

    #[test]
    fn test_create_rejects_bad_code() {
        let err = Account::create(0, "Cash", 1, AccountStatus::Active, NormalBalance::Debit).unwrap_err();
        assert_eq!(err.to_string(), "Code must be a positive number");
        assert_eq!(err.error_code(), codes::DOMAIN);

        let err = Account::create(10_000_000_000, "Cash", 1, AccountStatus::Active, NormalBalance::Debit)
            .unwrap_err();
        assert_eq!(err.to_string(), "Code cannot exceed 10 digits");
    }

    #[test]
    fn test_create_rejects_blank_and_long_names() {
        assert!(Account::create(1, "   ", 1, AccountStatus::Active, NormalBalance::Debit).is_err());
        let long = "x".repeat(MAX_ACCOUNT_NAME_LEN + 1);
        let err = Account::create(1, &long, 1, AccountStatus::Active, NormalBalance::Debit).unwrap_err();
        assert_eq!(err.to_string(), "Name cannot exceed 200 characters");
    }

    #[test]
    fn test_deactivate_then_activate() {
        let mut account = sample();
        account.deactivate().unwrap();
        assert_eq!(account.status, AccountStatus::Inactive);
        assert!(account.deactivated_at.is_some());
        assert!(account.updated_at.is_some());

        let err = account.deactivate().unwrap_err();
        assert_eq!(err.to_string(), "Account is already inactive");

        account.activate().unwrap();
        assert!(account.is_active());
        assert!(account.deactivated_at.is_none());
        assert_eq!(account.activate().unwrap_err().to_string(), "Account is already active");
    }

    #[test]
    fn test_update_tracks_status_change() {
        let mut account = sample();
        account.type_description = Some("Asset".to_string());
        account
            .update(2000, "Bank", 2, AccountStatus::Inactive, NormalBalance::Credit)
            .unwrap();

        assert_eq!(account.code, 2000);
        assert_eq!(account.type_id, 2);
        assert!(account.type_description.is_none());
        assert!(account.deactivated_at.is_some());
        assert!(account.updated_at.is_some());
    }
}
