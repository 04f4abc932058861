//! Handler-facing error type
//!
//! Handlers and extractors never build error bodies. An [`ApiError`] only
//! sets the status and stashes the fault in the response extensions, where
//! the error translation layer picks it up and writes the envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use coreledger_core::ClassifiedFault;
use std::sync::Arc;
use validator::ValidationErrors;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// A classified fault on its way out of a handler
#[derive(Debug)]
pub struct ApiError(pub ClassifiedFault);

/// Response extension carrying the fault raised while handling a request
#[derive(Debug, Clone)]
pub struct RaisedFault(pub Arc<ClassifiedFault>);

impl ApiError {
    pub fn fault(&self) -> &ClassifiedFault {
        &self.0
    }

    pub fn into_fault(self) -> ClassifiedFault {
        self.0
    }
}

impl From<ClassifiedFault> for ApiError {
    fn from(fault: ClassifiedFault) -> Self {
        ApiError(fault)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError(ClassifiedFault::from(errors))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = status.into_response();
        response.extensions_mut().insert(RaisedFault(Arc::new(self.0)));
        response
    }
}

/// Fallback for unmatched routes, so they also leave as an envelope
pub async fn handle_not_found(uri: axum::http::Uri) -> ApiError {
    ApiError(ClassifiedFault::not_found("Route", uri.path()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use coreledger_core::error::codes;

    #[test]
    fn test_status_follows_fault() {
        let response = ApiError::from(ClassifiedFault::conflict("stale row")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let raised = response.extensions().get::<RaisedFault>().unwrap();
        assert_eq!(raised.0.error_code(), codes::CONCURRENCY);
    }

    #[test]
    fn test_unclassified_is_internal_server_error() {
        let response = ApiError::from(ClassifiedFault::unclassified("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.extensions().get::<RaisedFault>().is_some());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let err = handle_not_found("/api/nothing".parse().unwrap()).await;
        assert_eq!(err.fault().status_code(), 404);
        assert_eq!(err.to_string(), "Route with id /api/nothing not found");
    }
}
