//! API configuration
//!
//! Runtime settings come from `API_`-prefixed environment variables
//! (`API_PORT=9000`); a bare `DATABASE_URL` is also honored since that is
//! what most tooling exports. Anything unset falls back to a default suited
//! to local development.

use std::net::{AddrParseError, SocketAddr};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Runtime configuration for the API process.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Log filter: trace, debug, info, warn, error.
    pub log_level: String,
}

impl ApiConfig {
    /// Loads configuration from the environment over built-in defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut loaded: Self = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("database_url", "postgres://localhost/catalog")?
            .set_default("log_level", "info")?
            .add_source(Environment::with_prefix("API"))
            .build()?
            .try_deserialize()?;

        // A bare DATABASE_URL wins over the prefixed form when both are set.
        if let Ok(url) = std::env::var("DATABASE_URL") {
            loaded.database_url = url;
        }

        Ok(loaded)
    }

    /// The socket address the server binds to.
    pub fn listen_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}
