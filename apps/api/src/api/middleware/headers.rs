use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};

use crate::api::errors::ApiError;
use crate::config::HeaderSecrets;

pub const X_TOKEN: &str = "x-token";
pub const X_KEY: &str = "x-key";

/// Guard requiring `X-Token` to match the configured token
///
/// Usable as a handler argument or as a route layer:
/// ```rust,ignore
/// router.route_layer(from_extractor_with_state::<VerifiedToken, _>(state))
/// ```
#[derive(Debug)]
pub struct VerifiedToken;

/// Guard requiring `X-Key` to match the configured key; yields the key
#[derive(Debug)]
pub struct VerifiedKey(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for VerifiedToken
where
    HeaderSecrets: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let secrets = HeaderSecrets::from_ref(state);
        let token = required_header(&parts.headers, X_TOKEN)?;

        if token != secrets.x_token {
            tracing::warn!("Rejected request with invalid X-Token");
            return Err(ApiError::bad_request("X-Token header invalid"));
        }

        Ok(VerifiedToken)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for VerifiedKey
where
    HeaderSecrets: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let secrets = HeaderSecrets::from_ref(state);
        let key = required_header(&parts.headers, X_KEY)?;

        if key != secrets.x_key {
            tracing::warn!("Rejected request with invalid X-Key");
            return Err(ApiError::bad_request("X-Key header invalid"));
        }

        Ok(VerifiedKey(key.to_string()))
    }
}

fn required_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, ApiError> {
    let value = headers.get(name).ok_or_else(|| {
        ApiError::unprocessable(format!("Missing header: {}", name))
            .with_field(name, "field required")
    })?;

    value.to_str().map_err(|_| {
        ApiError::unprocessable(format!("Header is not valid text: {}", name))
            .with_field(name, "must be visible ASCII")
    })
}
