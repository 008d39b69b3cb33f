use super::http_errors::map_auth_error;
use crate::auth::{get_api_key, AuthError, API_KEY_SCHEME};
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

/// Requires `Authorization: ApiKey <key>`; any failure rejects the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

/// Like [`ApiKey`], but a missing header is an anonymous request (`None`).
/// A malformed header is still rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalApiKey(pub Option<String>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRejection(pub AuthError);

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, body) = map_auth_error(&self.0);
        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            );
        }
        response
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(key) => Ok(Self(key.to_owned())),
            Err(e) => {
                debug!(error = %e, path = %parts.uri.path(), "Rejected API key");
                Err(e.into())
            }
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(key) => Ok(Self(Some(key.to_owned()))),
            Err(AuthError::NoAuthHeaderIncluded) => Ok(Self(None)),
            Err(e) => {
                debug!(error = %e, path = %parts.uri.path(), "Rejected API key");
                Err(e.into())
            }
        }
    }
}
