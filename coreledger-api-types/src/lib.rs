//! Wire types for the CoreLedger REST API
//!
//! All types serialize with lower-camel-case field names.

pub mod conversions;
pub mod domain;
pub mod errors;
pub mod pagination;
pub mod requests;

// Re-export main types for convenience
pub use domain::{AccountDto, AccountTypeDto, AccountsByTypeReportDto, HealthReport, ToDoDto};
pub use errors::ErrorEnvelope;
pub use pagination::Page;
pub use requests::{
    CreateAccountRequest, CreateAccountTypeRequest, CreateToDoRequest, UpdateAccountRequest,
    UpdateAccountTypeRequest, UpdateToDoRequest,
};
