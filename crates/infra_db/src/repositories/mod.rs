//! Repository implementations for catalog entities
//!
//! Each repository encapsulates the SQL for one entity and maps between
//! database rows and domain types. Mutations are single atomic statements;
//! concurrent writers are detected through version-conditioned updates
//! rather than row or table locks.

pub mod books;

pub use books::BookRepository;
