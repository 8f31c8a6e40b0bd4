//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL access for the catalog system using SQLx.
//! It follows the repository pattern: the connection pool is injected at
//! repository construction and never exposed beyond the repository boundary,
//! and every mutating operation is a single atomic SQL statement.
//!
//! Concurrent writers are coordinated exclusively through optimistic
//! concurrency control: updates are conditioned on the version read at fetch
//! time, and a lost race surfaces as [`RepositoryError::EditConflict`].
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{BookRepository, DatabaseConfig};
//!
//! let pool = DatabaseConfig::new("postgres://localhost/catalog").connect().await?;
//! let books = BookRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::RepositoryError;
pub use pool::DatabaseConfig;
pub use repositories::BookRepository;
