use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Correlation ID header name, honored on requests and echoed on responses
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

/// Trace ID header name, always generated by the server
pub const TRACE_ID_HEADER: &str = "X-Trace-ID";

/// Caller-visible identifier tying a request to its log lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-request identifier generated by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

impl TraceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifiers attached to every request
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub correlation_id: CorrelationId,
    pub trace_id: TraceId,
}

impl RequestContext {
    /// Honor a non-blank incoming correlation id, otherwise mint one
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let correlation_id = headers
            .get(CORRELATION_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| CorrelationId::from_string(s.to_string()))
            .unwrap_or_default();

        Self {
            correlation_id,
            trace_id: TraceId::new(),
        }
    }

    /// Context already established by an outer layer, or a fresh one
    pub fn of<B>(request: &Request<B>) -> Self {
        request
            .extensions()
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| Self::from_headers(request.headers()))
    }

    /// Write both identifiers onto response headers
    pub fn apply_headers(&self, headers: &mut HeaderMap) {
        if let Ok(value) = HeaderValue::from_str(self.correlation_id.as_str()) {
            headers.insert(CORRELATION_ID_HEADER, value);
        }
        if let Ok(value) = HeaderValue::from_str(self.trace_id.as_str()) {
            headers.insert(TRACE_ID_HEADER, value);
        }
    }
}

/// Middleware making the request context available to handlers
///
/// Reuses the context installed by the error translation layer when present.
pub async fn correlation_middleware(mut request: Request<axum::body::Body>, next: Next) -> Response {
    let context = RequestContext::of(&request);
    request.extensions_mut().insert(context.clone());

    let mut response = next.run(request).await;
    context.apply_headers(response.headers_mut());
    response
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .unwrap_or_else(|| RequestContext::from_headers(&parts.headers)))
    }
}

impl<S> FromRequestParts<S> for CorrelationId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let context = RequestContext::from_request_parts(parts, state).await?;
        Ok(context.correlation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::{middleware, routing::get, Router};
    use tower::ServiceExt;

    async fn echo_handler(correlation_id: CorrelationId) -> impl IntoResponse {
        (StatusCode::OK, correlation_id.to_string())
    }

    fn app() -> Router {
        Router::new()
            .route("/test", get(echo_handler))
            .layer(middleware::from_fn(correlation_middleware))
    }

    #[tokio::test]
    async fn test_generates_ids_when_absent() {
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let correlation = response.headers()[CORRELATION_ID_HEADER].to_str().unwrap().to_string();
        assert!(Uuid::parse_str(&correlation).is_ok());
        let trace = response.headers()[TRACE_ID_HEADER].to_str().unwrap();
        assert_eq!(trace.len(), 32);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, correlation.as_bytes());
    }

    #[tokio::test]
    async fn test_honors_incoming_correlation_id() {
        let request = Request::builder()
            .uri("/test")
            .header(CORRELATION_ID_HEADER, "abc")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[CORRELATION_ID_HEADER], "abc");
    }

    #[test]
    fn test_blank_correlation_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_ID_HEADER, HeaderValue::from_static("   "));
        let context = RequestContext::from_headers(&headers);
        assert!(Uuid::parse_str(context.correlation_id.as_str()).is_ok());
    }

    #[test]
    fn test_existing_context_is_reused() {
        let context = RequestContext::from_headers(&HeaderMap::new());
        let mut request = Request::builder().uri("/").body(()).unwrap();
        request.extensions_mut().insert(context.clone());

        let reused = RequestContext::of(&request);
        assert_eq!(reused.correlation_id, context.correlation_id);
        assert_eq!(reused.trace_id, context.trace_id);
    }
}
