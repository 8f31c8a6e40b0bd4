//! Database connection pool management
//!
//! Pool configuration and creation for PostgreSQL via SQLx. One pool is
//! opened at process startup and shared by every repository; nothing outside
//! the repository layer holds it.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::error::RepositoryError;

/// Connection pool settings.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use infra_db::DatabaseConfig;
///
/// let config = DatabaseConfig::new("postgres://localhost/catalog")
///     .max_connections(20)
///     .acquire_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    url: String,
    max_connections: u32,
    min_connections: u32,
    acquire_timeout: Duration,
    max_lifetime: Duration,
    idle_timeout: Duration,
}

impl DatabaseConfig {
    /// Settings for the given connection URL, sized for a small service:
    /// 10 connections, 30-second acquire timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(30),
            max_lifetime: Duration::from_secs(30 * 60),
            idle_timeout: Duration::from_secs(10 * 60),
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// How long an operation may wait for a free connection. Past this, the
    /// operation fails with [`RepositoryError::PoolExhausted`].
    pub fn acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    pub fn max_lifetime(mut self, lifetime: Duration) -> Self {
        self.max_lifetime = lifetime;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Opens the pool described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ConnectionFailed`] when the server is
    /// unreachable or refuses the connection.
    pub async fn connect(&self) -> Result<PgPool, RepositoryError> {
        info!(
            max_connections = self.max_connections,
            min_connections = self.min_connections,
            "opening database pool"
        );

        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.acquire_timeout)
            .max_lifetime(self.max_lifetime)
            .idle_timeout(self.idle_timeout)
            .connect(&self.url)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_the_sized_defaults() {
        let config = DatabaseConfig::new("postgres://test")
            .max_connections(50)
            .min_connections(10)
            .acquire_timeout(Duration::from_secs(60));

        assert_eq!(config.max_connections, 50);
        assert_eq!(config.min_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(60));
        assert_eq!(config.max_lifetime, Duration::from_secs(30 * 60));
    }
}
