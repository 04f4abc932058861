use axum::response::{IntoResponse, Response};
use coreledger_core::ClassifiedFault;
use std::any::Any;

use crate::errors::ApiError;

/// Turn a caught panic into an unclassified fault response
///
/// Meant for `CatchPanicLayer::custom`, installed inside the error
/// translation layer so the panic still leaves as an envelope.
pub fn panic_to_fault(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    };

    ApiError(ClassifiedFault::unclassified(format!("Request handler panicked: {}", detail))).into_response()
}
