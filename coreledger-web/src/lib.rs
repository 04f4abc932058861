//! # CoreLedger Web Utilities
//!
//! Middleware and extractors shared by the CoreLedger HTTP API.
//!
//! ## Features
//!
//! - **Error translation**: the outermost layer turning every [`ApiError`]
//!   into a single JSON [`ErrorEnvelope`](coreledger_api_types::ErrorEnvelope)
//! - **Middleware**: correlation and trace ids, panic capture, request logging, CORS
//! - **Extractors**: validated JSON bodies, integer path ids, listing queries
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use coreledger_web::middleware::{
//!     correlation_middleware, error_translation_middleware, ErrorTranslationConfig,
//! };
//!
//! async fn hello() -> &'static str {
//!     "hello"
//! }
//!
//! let app: Router = Router::new()
//!     .route("/hello", get(hello))
//!     .layer(middleware::from_fn(correlation_middleware))
//!     .layer(middleware::from_fn_with_state(
//!         ErrorTranslationConfig::production(),
//!         error_translation_middleware,
//!     ));
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;

// Re-export commonly used types and functions
pub use errors::{handle_not_found, ApiError, ApiResult, RaisedFault};
pub use extractors::{IdPath, ListQuery, ValidatedJson};
pub use middleware::{
    correlation_middleware, cors_layer_with_config, error_translation_middleware, log_response, make_request_span,
    panic_to_fault, CorrelationId, CorsConfig, ErrorTranslationConfig, RequestContext, TraceId,
    CORRELATION_ID_HEADER, TRACE_ID_HEADER,
};
