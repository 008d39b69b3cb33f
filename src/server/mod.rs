//! HTTP server support (standalone + embeddable).
//!
//! - **Standalone**: `api-key-auth-server` binary calls `run()`
//! - **Embedded**: handlers take [`ApiKey`] / [`OptionalApiKey`] as extractors,
//!   or a host Axum app nests `router()`

mod http;
mod http_auth;
mod http_errors;

pub use http::router;
pub use http_auth::{ApiKey, AuthRejection, OptionalApiKey};

use crate::infrastructure::AppConfig;
use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Standalone entrypoint for the `api-key-auth-server` binary.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("load config")?;
    init_tracing(&config.log_filter);

    let addr = config.listen_addr().context("parse listen address")?;
    let listener = TcpListener::bind(addr).await.context("bind listener")?;

    info!(
        host = %config.server_host,
        port = config.server_port,
        "Server running"
    );

    axum::serve(listener, router()).await.context("serve")?;
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
