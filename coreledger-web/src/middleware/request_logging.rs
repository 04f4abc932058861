//! Span and completion hooks for `tower_http::trace::TraceLayer`
//!
//! ```rust,ignore
//! TraceLayer::new_for_http()
//!     .make_span_with(make_request_span)
//!     .on_response(log_response)
//! ```

use axum::body::Body;
use axum::http::{Request, Response};
use std::time::Duration;
use tracing::{info, Span};

use super::correlation::RequestContext;

/// Span carrying the request identifiers, method and path
pub fn make_request_span(request: &Request<Body>) -> Span {
    match request.extensions().get::<RequestContext>() {
        Some(context) => tracing::info_span!(
            "http_request",
            correlation_id = %context.correlation_id,
            trace_id = %context.trace_id,
            method = %request.method(),
            path = %request.uri().path(),
        ),
        None => tracing::info_span!(
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
        ),
    }
}

/// Completion line; method and path come from the enclosing span
pub fn log_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    info!(
        status = response.status().as_u16(),
        duration_ms = latency.as_millis() as u64,
        "Request completed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{routing::get, Router};
    use tower::ServiceExt;
    use tower_http::trace::TraceLayer;

    #[tokio::test]
    async fn test_trace_layer_hooks_leave_response_untouched() {
        let app = Router::new().route("/test", get(|| async { "ok" })).layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(log_response),
        );

        let mut request = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let context = RequestContext::from_headers(request.headers());
        request.extensions_mut().insert(context);
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
