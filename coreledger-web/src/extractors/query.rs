use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use coreledger_core::{QuerySpec, RawListQuery};

/// Listing parameters, already normalized into a [`QuerySpec`]
///
/// Never rejects: unparsable values fall back to their defaults. The query
/// string is read as raw pairs so a repeated or odd key only affects itself.
#[derive(Debug, Clone, Default)]
pub struct ListQuery(pub QuerySpec);

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw: RawListQuery = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs.into_iter().collect(),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Ignoring unreadable listing query");
                RawListQuery::default()
            }
        };
        Ok(ListQuery(QuerySpec::from(raw)))
    }
}
