use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use coreledger_core::ClassifiedFault;

use crate::errors::ApiError;

/// Integer `{id}` path segment
///
/// Anything that is not a 32-bit integer is rejected as a validation fault on
/// the `id` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError(ClassifiedFault::invalid_field("id", rejection.body_text())))?;

        raw.trim().parse::<i32>().map(IdPath).map_err(|_| {
            ApiError(ClassifiedFault::invalid_field(
                "id",
                format!("The value '{}' is not valid.", raw),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::response::IntoResponse;
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    async fn show(IdPath(id): IdPath) -> impl IntoResponse {
        id.to_string()
    }

    async fn call(uri: &str) -> axum::response::Response {
        Router::new()
            .route("/items/{id}", get(show))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_integer_id() {
        let response = call("/items/42").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "42");
    }

    #[tokio::test]
    async fn test_non_integer_id_is_field_error() {
        let response = call("/items/abc").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let raised = response.extensions().get::<crate::RaisedFault>().unwrap();
        assert_eq!(raised.0.field_errors().unwrap()["id"], vec!["The value 'abc' is not valid."]);
    }
}
