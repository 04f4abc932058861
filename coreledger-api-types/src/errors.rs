//! Error body returned for every failed request

use coreledger_core::FieldErrors;
use serde::{Deserialize, Serialize};

/// Structured error payload
///
/// Every field is always present; absent values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub error_code: String,
    pub message: String,
    pub correlation_id: Option<String>,
    pub errors: Option<FieldErrors>,
    pub trace_id: Option<String>,
}
