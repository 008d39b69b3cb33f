use http::header::{HeaderMap, AUTHORIZATION};
use thiserror::Error;

/// Scheme prefix accepted in the `Authorization` header.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Header is absent or its first value is empty.
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    /// Header is present but is not `ApiKey <key>`.
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extract the API key from an `Authorization: ApiKey <key>` header.
///
/// Only the first `Authorization` value is considered. The value is split on
/// every single space and the field right after the scheme is returned as is,
/// so `"ApiKey "` and `"ApiKey  abc"` both yield an empty key.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::NoAuthHeaderIncluded),
    };

    // Any UTF-8 is accepted, not just the visible ASCII `to_str` allows.
    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedAuthHeader)?;

    let mut fields = value.split(' ');
    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}
