//! Core domain models and types for CoreLedger
//!
//! This crate contains the ledger entities, the closed fault taxonomy raised
//! by domain and application code, and the request-derived query
//! specification used by account listings. It has minimal dependencies and
//! defines the domain language of the application.

pub mod entities;
pub mod error;
pub mod query;
pub mod validation;

// Re-export commonly used types at the crate root
pub use entities::{Account, AccountStatus, AccountType, NormalBalance, ToDo};
pub use error::{ClassifiedFault, FaultResult, FieldErrors};
pub use query::{AccountField, AccountFilter, QuerySpec, RawListQuery, SortDirection};
