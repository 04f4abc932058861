use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::required_text;
use crate::error::FaultResult;

/// Maximum length of an account type description
pub const MAX_ACCOUNT_TYPE_DESCRIPTION_LEN: usize = 100;

/// Classification applied to accounts (asset, liability, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountType {
    pub id: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AccountType {
    pub fn create(description: &str) -> FaultResult<Self> {
        let description = required_text(description, "Description", MAX_ACCOUNT_TYPE_DESCRIPTION_LEN)?;
        Ok(Self {
            id: 0,
            description,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    pub fn update_description(&mut self, description: &str) -> FaultResult<()> {
        self.description = required_text(description, "Description", MAX_ACCOUNT_TYPE_DESCRIPTION_LEN)?;
        self.updated_at = Some(Utc::now());
        Ok(())
    }
}
