//! `Authorization: ApiKey <key>` parsing.
//!
//! Framework-agnostic: works on a plain `http::HeaderMap` so it can be used
//! without the `server` feature.

pub mod api_key;

pub use api_key::*;
