//! Outermost layer turning raised faults into error envelopes
//!
//! Installs the [`RequestContext`] before anything else runs, so every inner
//! layer and handler sees the same identifiers. On the way out, a response
//! carrying a [`RaisedFault`] is logged once at ERROR and replaced by exactly
//! one JSON envelope.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use coreledger_api_types::ErrorEnvelope;
use coreledger_core::ClassifiedFault;
use serde::Serialize;
use tracing::error;

use super::correlation::RequestContext;
use crate::errors::RaisedFault;

/// Message shown for unclassified faults outside development
pub const REDACTED_MESSAGE: &str =
    "An error occurred while processing your request. Please contact support with the correlation ID.";

/// Message used when an unclassified fault carries no text of its own
pub const INTERNAL_MESSAGE: &str = "An internal server error occurred";

/// How much of a fault reaches the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorTranslationConfig {
    /// Show unclassified messages and trace ids; development only
    pub expose_details: bool,
}

impl ErrorTranslationConfig {
    pub fn development() -> Self {
        Self { expose_details: true }
    }

    pub fn production() -> Self {
        Self { expose_details: false }
    }
}

pub async fn error_translation_middleware(
    State(config): State<ErrorTranslationConfig>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let context = RequestContext::of(&request);
    request.extensions_mut().insert(context.clone());

    let response = next.run(request).await;
    match response.extensions().get::<RaisedFault>() {
        Some(raised) => {
            let raised = raised.clone();
            let mut translated = translate_fault(&config, &context, &raised.0);
            carry_headers(response.headers(), translated.headers_mut());
            translated
        }
        None => response,
    }
}

/// Keep headers set by inner layers (CORS, caching) on the envelope
///
/// Body framing headers and anything the envelope already set are skipped.
fn carry_headers(from: &HeaderMap, to: &mut HeaderMap) {
    let own: Vec<_> = to.keys().cloned().collect();
    for (name, value) in from {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH || own.contains(name) {
            continue;
        }
        to.append(name.clone(), value.clone());
    }
}

/// Log a fault and render its envelope
pub fn translate_fault(config: &ErrorTranslationConfig, context: &RequestContext, fault: &ClassifiedFault) -> Response {
    error!(
        correlation_id = %context.correlation_id,
        trace_id = %context.trace_id,
        error_code = fault.error_code(),
        status = fault.status_code(),
        error = %fault.detail(),
        "Request failed"
    );

    let status = StatusCode::from_u16(fault.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    render(status, &build_envelope(config, context, fault), context)
}

/// Envelope for a fault under the given exposure rules
pub fn build_envelope(config: &ErrorTranslationConfig, context: &RequestContext, fault: &ClassifiedFault) -> ErrorEnvelope {
    ErrorEnvelope {
        error_code: fault.error_code().to_string(),
        message: public_message(config, fault),
        correlation_id: Some(context.correlation_id.to_string()),
        errors: fault.field_errors().cloned(),
        trace_id: config.expose_details.then(|| context.trace_id.to_string()),
    }
}

fn public_message(config: &ErrorTranslationConfig, fault: &ClassifiedFault) -> String {
    if fault.is_domain_fault() {
        return fault.to_string();
    }
    if !config.expose_details {
        return REDACTED_MESSAGE.to_string();
    }
    let raw = fault.to_string();
    if raw.trim().is_empty() {
        INTERNAL_MESSAGE.to_string()
    } else {
        raw
    }
}

/// Serialize a body, falling back to a bare 500 if that fails
fn render<T: Serialize>(status: StatusCode, body: &T, context: &RequestContext) -> Response {
    let mut response = match serde_json::to_vec(body) {
        Ok(bytes) => {
            let mut response = (status, bytes).into_response();
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
            response
        }
        Err(err) => {
            error!(
                correlation_id = %context.correlation_id,
                error = %err,
                "Failed to serialize error envelope"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    };
    context.apply_headers(response.headers_mut());
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::middleware::correlation::{correlation_middleware, CORRELATION_ID_HEADER, TRACE_ID_HEADER};
    use axum::{middleware, routing::get, Router};
    use coreledger_core::error::codes;
    use tower::ServiceExt;

    async fn missing() -> Result<&'static str, ApiError> {
        Err(ClassifiedFault::not_found("ToDo", 999).into())
    }

    async fn broken() -> Result<&'static str, ApiError> {
        Err(ClassifiedFault::unclassified("connection refused").into())
    }

    async fn fine() -> &'static str {
        "ok"
    }

    async fn missing_with_headers() -> impl IntoResponse {
        (
            [(header::VARY, "origin"), (header::CONTENT_LENGTH, "3")],
            ApiError::from(ClassifiedFault::not_found("ToDo", 7)),
        )
    }

    fn app(config: ErrorTranslationConfig) -> Router {
        Router::new()
            .route("/missing", get(missing))
            .route("/broken", get(broken))
            .route("/fine", get(fine))
            .route("/missing-with-headers", get(missing_with_headers))
            .layer(middleware::from_fn(correlation_middleware))
            .layer(middleware::from_fn_with_state(config, error_translation_middleware))
    }

    async fn call(config: ErrorTranslationConfig, uri: &str) -> (StatusCode, axum::http::HeaderMap, serde_json::Value) {
        let request = Request::builder()
            .uri(uri)
            .header(CORRELATION_ID_HEADER, "abc")
            .body(Body::empty())
            .unwrap();
        let response = app(config).oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, headers, body)
    }

    #[tokio::test]
    async fn test_not_found_envelope() {
        let (status, headers, body) = call(ErrorTranslationConfig::production(), "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(body["errorCode"], codes::NOT_FOUND);
        assert_eq!(body["message"], "ToDo with id 999 not found");
        assert_eq!(body["correlationId"], "abc");
        assert!(body["errors"].is_null());
        assert!(body["traceId"].is_null());
    }

    #[tokio::test]
    async fn test_unclassified_is_redacted_in_production() {
        let (status, _, body) = call(ErrorTranslationConfig::production(), "/broken").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["errorCode"], codes::INTERNAL);
        assert_eq!(body["message"], REDACTED_MESSAGE);
        assert!(body["traceId"].is_null());
    }

    #[tokio::test]
    async fn test_unclassified_is_exposed_in_development() {
        let (_, headers, body) = call(ErrorTranslationConfig::development(), "/broken").await;
        assert_eq!(body["message"], "connection refused");
        assert_eq!(body["traceId"], headers[TRACE_ID_HEADER].to_str().unwrap());
        assert_eq!(headers[CORRELATION_ID_HEADER], "abc");
    }

    #[tokio::test]
    async fn test_success_passes_through_with_one_trace_id() {
        let (status, headers, _) = call(ErrorTranslationConfig::production(), "/fine").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers.get_all(TRACE_ID_HEADER).iter().count(), 1);
    }

    #[tokio::test]
    async fn test_inner_headers_survive_translation() {
        let (status, headers, body) = call(ErrorTranslationConfig::production(), "/missing-with-headers").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(headers[header::VARY], "origin");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_ne!(headers.get(header::CONTENT_LENGTH).map(|v| v.as_bytes()), Some(&b"3"[..]));
        assert_eq!(headers.get_all(CORRELATION_ID_HEADER).iter().count(), 1);
        assert_eq!(body["errorCode"], codes::NOT_FOUND);
    }

    #[test]
    fn test_field_errors_are_carried() {
        let fault = ClassifiedFault::invalid_field("name", "Name is required");
        let context = RequestContext::from_headers(&axum::http::HeaderMap::new());
        let envelope = build_envelope(&ErrorTranslationConfig::production(), &context, &fault);
        assert_eq!(envelope.error_code, codes::VALIDATION);
        assert_eq!(envelope.errors.unwrap()["name"], vec!["Name is required"]);
    }

    #[test]
    fn test_blank_unclassified_message_falls_back() {
        let fault = ClassifiedFault::unclassified("");
        let message = public_message(&ErrorTranslationConfig::development(), &fault);
        assert_eq!(message, INTERNAL_MESSAGE);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refusing to serialize"))
        }
    }

    #[tokio::test]
    async fn test_serialization_failure_writes_bare_500() {
        let context = RequestContext::from_headers(&axum::http::HeaderMap::new());
        let response = render(StatusCode::NOT_FOUND, &Unserializable, &context);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().contains_key(CORRELATION_ID_HEADER));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}
