use super::http_auth::{ApiKey, OptionalApiKey};
use crate::auth::API_KEY_SCHEME;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/auth/key", get(inspect_key))
        .route("/auth/whoami", get(whoami))
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[derive(Serialize)]
struct KeyResponse {
    scheme: &'static str,
    key_length: usize,
}

/// Requires a key. Only its length is echoed back.
async fn inspect_key(ApiKey(key): ApiKey) -> impl IntoResponse {
    info!(key_length = key.len(), "API key accepted");
    (
        StatusCode::OK,
        Json(KeyResponse {
            scheme: API_KEY_SCHEME,
            key_length: key.len(),
        }),
    )
}

#[derive(Serialize)]
struct WhoamiResponse {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    key_length: Option<usize>,
}

async fn whoami(OptionalApiKey(key): OptionalApiKey) -> impl IntoResponse {
    let body = WhoamiResponse {
        authenticated: key.is_some(),
        key_length: key.as_deref().map(str::len),
    };
    (StatusCode::OK, Json(body))
}
