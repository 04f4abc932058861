//! Core fault taxonomy for CoreLedger
//!
//! Domain and application code never shape HTTP responses. They return a
//! [`ClassifiedFault`] and let the outermost web layer translate it.

use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;

/// Field name to the list of messages reported for it
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result type used across domain and application code
pub type FaultResult<T> = Result<T, ClassifiedFault>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Stable error codes exposed to API clients
pub mod codes {
    pub const NOT_FOUND: &str = "ERR-NOTFOUND-001";
    pub const DOMAIN: &str = "ERR-DOMAIN-001";
    pub const VALIDATION: &str = "ERR-VALIDATION-001";
    pub const CONCURRENCY: &str = "ERR-CONCURRENCY-001";
    pub const INTERNAL: &str = "ERR-INTERNAL-001";
}

/// Closed set of faults that can escape request handling
#[derive(Debug, Error)]
pub enum ClassifiedFault {
    /// Requested entity does not exist
    #[error("{entity} with id {id} not found")]
    NotFound { entity: String, id: String },

    /// Input or domain rule violation, optionally with per-field detail
    #[error("{message}")]
    Validation {
        message: String,
        field_errors: Option<FieldErrors>,
    },

    /// Concurrent modification or similar state conflict
    #[error("{message}")]
    Conflict { message: String },

    /// Any other classified domain fault carrying its own code
    #[error("{message}")]
    Domain { code: String, message: String },

    /// Everything else; the message is never shown outside development
    #[error("{message}")]
    Unclassified {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl ClassifiedFault {
    pub fn not_found(entity: impl Into<String>, id: impl Display) -> Self {
        ClassifiedFault::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ClassifiedFault::Validation {
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn validation_with_fields(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        ClassifiedFault::Validation {
            message: message.into(),
            field_errors: Some(field_errors),
        }
    }

    /// Validation fault reporting a single field
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = FieldErrors::new();
        field_errors.insert(field.into(), vec![message.clone()]);
        Self::validation_with_fields(message, field_errors)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ClassifiedFault::Conflict {
            message: message.into(),
        }
    }

    pub fn domain(code: impl Into<String>, message: impl Into<String>) -> Self {
        ClassifiedFault::Domain {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        ClassifiedFault::Unclassified {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an arbitrary error, keeping it as the source for logging
    pub fn unclassified_from<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ClassifiedFault::Unclassified {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            ClassifiedFault::NotFound { .. } => codes::NOT_FOUND,
            ClassifiedFault::Validation { .. } if self.field_errors().is_some() => codes::VALIDATION,
            ClassifiedFault::Validation { .. } => codes::DOMAIN,
            ClassifiedFault::Conflict { .. } => codes::CONCURRENCY,
            ClassifiedFault::Domain { code, .. } => code,
            ClassifiedFault::Unclassified { .. } => codes::INTERNAL,
        }
    }

    /// Get the HTTP status code for this fault
    pub fn status_code(&self) -> u16 {
        match self {
            ClassifiedFault::NotFound { .. } => 404,
            ClassifiedFault::Validation { .. } => 400,
            ClassifiedFault::Conflict { .. } => 409,
            ClassifiedFault::Domain { .. } => 400,
            ClassifiedFault::Unclassified { .. } => 500,
        }
    }

    /// Whether the fault was raised deliberately by domain or application code
    pub fn is_domain_fault(&self) -> bool {
        !matches!(self, ClassifiedFault::Unclassified { .. })
    }

    /// Field-level errors, if any were attached and non-empty
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClassifiedFault::Validation {
                field_errors: Some(errors),
                ..
            } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }

    /// Message followed by every source in the chain, for logs only
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            detail.push_str(": ");
            detail.push_str(&err.to_string());
            source = err.source();
        }
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("disk on fire")]
    struct Inner;

    #[derive(Debug, Error)]
    #[error("write failed")]
    struct Outer(#[source] Inner);

    #[test]
    fn test_not_found_message_and_code() {
        let fault = ClassifiedFault::not_found("ToDo", 999);
        assert_eq!(fault.to_string(), "ToDo with id 999 not found");
        assert_eq!(fault.error_code(), codes::NOT_FOUND);
        assert_eq!(fault.status_code(), 404);
        assert!(fault.is_domain_fault());
    }

    #[test]
    fn test_validation_code_depends_on_field_errors() {
        let plain = ClassifiedFault::validation("Account is already inactive");
        assert_eq!(plain.error_code(), codes::DOMAIN);
        assert!(plain.field_errors().is_none());

        let fielded = ClassifiedFault::invalid_field("name", "Name is required");
        assert_eq!(fielded.error_code(), codes::VALIDATION);
        assert_eq!(fielded.field_errors().unwrap()["name"], vec!["Name is required"]);

        let empty = ClassifiedFault::validation_with_fields("nothing", FieldErrors::new());
        assert_eq!(empty.error_code(), codes::DOMAIN);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ClassifiedFault::conflict("stale").status_code(), 409);
        assert_eq!(ClassifiedFault::conflict("stale").error_code(), codes::CONCURRENCY);
        assert_eq!(ClassifiedFault::domain("ERR-LEDGER-042", "closed").status_code(), 400);
        assert_eq!(ClassifiedFault::domain("ERR-LEDGER-042", "closed").error_code(), "ERR-LEDGER-042");
        assert_eq!(ClassifiedFault::unclassified("boom").status_code(), 500);
    }

    #[test]
    fn test_unclassified_is_not_domain_fault() {
        let fault = ClassifiedFault::unclassified("boom");
        assert!(!fault.is_domain_fault());
        assert_eq!(fault.error_code(), codes::INTERNAL);
    }

    #[test]
    fn test_detail_walks_source_chain() {
        let fault = ClassifiedFault::unclassified_from(Outer(Inner));
        assert_eq!(fault.to_string(), "write failed");
        assert_eq!(fault.detail(), "write failed: write failed: disk on fire");
    }
}
