pub mod correlation;
pub mod cors;
pub mod error_translation;
pub mod panic;
pub mod request_logging;

// Re-export middleware functions and their configuration
pub use correlation::{
    correlation_middleware, CorrelationId, RequestContext, TraceId, CORRELATION_ID_HEADER, TRACE_ID_HEADER,
};
pub use cors::{cors_layer_with_config, CorsConfig};
pub use error_translation::{error_translation_middleware, translate_fault, ErrorTranslationConfig};
pub use panic::panic_to_fault;
pub use request_logging::{log_response, make_request_span};
