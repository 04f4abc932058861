use axum::{
    extract::{FromRequest, Request},
    Json,
};
use coreledger_core::ClassifiedFault;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::ApiError;

/// JSON body that has been deserialized and validated
///
/// A malformed body is a validation fault without field errors; rule
/// violations carry one entry per offending field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError(ClassifiedFault::validation(rejection.body_text())))?;
        value.validate()?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request as HttpRequest};
    use coreledger_api_types::CreateToDoRequest;

    async fn extract(body: &'static str) -> Result<ValidatedJson<CreateToDoRequest>, ApiError> {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/api/todos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        ValidatedJson::<CreateToDoRequest>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_valid_body() {
        let ValidatedJson(request) = extract(r#"{"description":"Buy milk"}"#).await.unwrap();
        assert_eq!(request.description, "Buy milk");
    }

    #[tokio::test]
    async fn test_malformed_body_has_no_field_errors() {
        let err = extract(r#"{"description":"#).await.unwrap_err();
        assert_eq!(err.fault().status_code(), 400);
        assert!(err.fault().field_errors().is_none());
    }

    #[tokio::test]
    async fn test_rule_violation_reports_field() {
        let err = extract(r#"{"description":"   "}"#).await.unwrap_err();
        let fields = err.fault().field_errors().unwrap();
        assert_eq!(fields["description"], vec!["Description is required"]);
    }
}
