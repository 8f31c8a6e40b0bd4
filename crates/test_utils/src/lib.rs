//! Shared test utilities for the catalog workspace.
//!
//! - [`builders`] — builder types producing valid domain entities with
//!   selective overrides
//! - [`fixtures`] — canned, human-recognizable test data
//! - [`generators`] — randomized data via `fake`
//! - [`database`] — a testcontainers-backed PostgreSQL instance with the
//!   catalog schema applied

pub mod builders;
pub mod database;
pub mod fixtures;
pub mod generators;

pub use builders::TestBookBuilder;
pub use database::TestDatabase;
