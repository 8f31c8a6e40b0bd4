//! Database test support
//!
//! Starts a throwaway PostgreSQL container and applies the catalog schema so
//! repository tests run against a real store.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use testcontainers::{
    core::{IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

const DB_USER: &str = "catalog_test";
const DB_PASSWORD: &str = "catalog_test";
const DB_NAME: &str = "catalog_test";

/// A disposable PostgreSQL instance with the catalog schema applied.
///
/// Dropping this value stops the container, so keep it in scope for the
/// whole test.
pub struct TestDatabase {
    _container: ContainerAsync<GenericImage>,
    pub pool: PgPool,
    url: String,
}

impl TestDatabase {
    /// Boots a `postgres:16-alpine` container, connects, and applies the
    /// workspace schema.
    ///
    /// # Errors
    ///
    /// Fails when no Docker daemon is reachable or the schema cannot be
    /// applied.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = GenericImage::new("postgres", "16-alpine")
            .with_wait_for(WaitFor::message_on_stderr(
                "database system is ready to accept connections",
            ))
            .with_exposed_port(5432.tcp())
            .with_env_var("POSTGRES_USER", DB_USER)
            .with_env_var("POSTGRES_PASSWORD", DB_PASSWORD)
            .with_env_var("POSTGRES_DB", DB_NAME)
            .start()
            .await?;

        let host = container.get_host().await?;
        let port = container.get_host_port_ipv4(5432.tcp()).await?;
        let url = format!("postgres://{DB_USER}:{DB_PASSWORD}@{host}:{port}/{DB_NAME}");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&url)
            .await?;

        sqlx::raw_sql(include_str!(
            "../../../migrations/20240101000001_initial_schema.sql"
        ))
        .execute(&pool)
        .await?;

        Ok(Self {
            _container: container,
            pool,
            url,
        })
    }

    /// The connection URL of the running container.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Empties the books table and resets the id sequence so tests sharing a
    /// container start from a clean slate.
    pub async fn truncate_books(&self) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE books RESTART IDENTITY")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
