use crate::auth::AuthError;
use axum::http::StatusCode;

pub(super) fn map_auth_error(err: &AuthError) -> (StatusCode, serde_json::Value) {
    match err {
        AuthError::NoAuthHeaderIncluded => (
            StatusCode::UNAUTHORIZED,
            serde_json::json!({ "error": err.to_string() }),
        ),
        AuthError::MalformedAuthHeader => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({ "error": err.to_string() }),
        ),
    }
}
