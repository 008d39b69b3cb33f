//! API Key Auth
//!
//! Extracts the key from an `Authorization: ApiKey <key>` header.
//!
//! ## Library
//!
//! ```rust
//! use api_key_auth::auth::{get_api_key, AuthError};
//! use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey abc123"));
//! assert_eq!(get_api_key(&headers), Ok("abc123"));
//! assert_eq!(get_api_key(&HeaderMap::new()), Err(AuthError::NoAuthHeaderIncluded));
//! ```
//!
//! ## Embedded (Axum)
//!
//! When the `server` feature is enabled, handlers can take the key as an extractor:
//! ```rust,ignore
//! use api_key_auth::server::{ApiKey, OptionalApiKey};
//!
//! async fn private(ApiKey(key): ApiKey) { /* ... */ }
//! async fn public(OptionalApiKey(key): OptionalApiKey) { /* ... */ }
//! ```
//!
//! ## Standalone
//!
//! ```bash
//! api-key-auth-server
//! ```

pub mod auth;
pub mod infrastructure;

// Enabled behind the `server` feature so the core library can be used without Axum.
#[cfg(feature = "server")]
pub mod server;

pub use auth::*;
pub use infrastructure::*;
