use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i32,
    pub code: i64,
    pub name: String,
    pub type_id: i32,
    pub type_description: String,
    /// Ordinal of the account status
    pub status: i32,
    pub status_description: String,
    /// Ordinal of the normal balance
    pub normal_balance: i32,
    pub normal_balance_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deactivated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTypeDto {
    pub id: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDoDto {
    pub id: i32,
    pub description: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Number of active accounts for one account type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsByTypeReportDto {
    pub type_id: i32,
    pub type_description: String,
    pub active_account_count: u64,
}

/// Body returned by the health endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
}

impl HealthReport {
    pub fn healthy() -> Self {
        Self {
            status: "Healthy".to_string(),
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "Unhealthy".to_string(),
        }
    }
}
