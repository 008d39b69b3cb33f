use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Default `tracing` filter; `RUST_LOG` wins when set.
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder(Environment::with_prefix("APIKEY"))?
            .build()?
            .try_deserialize()
    }

    // APIKEY_SERVER_PORT -> server_port (flat keys, no nesting)
    fn builder(env: Environment) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env)
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 8080)?
            .set_default("log_filter", "info")
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.server_host, self.server_port).parse()
    }
}
