use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use serde::Deserialize;

use crate::api::errors::ApiError;

pub const LAST_QUERY_COOKIE: &str = "last_query";

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: Option<String>,
}

/// The `q` query parameter, falling back to the `last_query` cookie
///
/// An empty `q` counts as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOrCookie(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for QueryOrCookie
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(search) = Query::<SearchQuery>::from_request_parts(parts, state).await?;

        match search.q.filter(|q| !q.is_empty()) {
            Some(q) => Ok(QueryOrCookie(Some(q))),
            None => Ok(QueryOrCookie(cookie(&parts.headers, LAST_QUERY_COOKIE))),
        }
    }
}

/// Finds a cookie by name across every `Cookie` header
fn cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| unquote(value.trim()).to_string())
}

/// Strips one pair of surrounding double quotes; anything else is kept as sent
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}
