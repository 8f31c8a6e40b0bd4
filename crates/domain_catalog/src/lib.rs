//! Catalog Domain
//!
//! This crate holds the domain model for catalog records (books) together
//! with the pure logic that surrounds them: validation rules, the patch
//! structure used for partial updates, and the resolver that turns untrusted
//! list-query parameters into a bounded query specification.
//!
//! Nothing in this crate touches storage. The repository layer (`infra_db`)
//! consumes the types defined here; HTTP adapters consume both.
//!
//! # Example
//!
//! ```rust
//! use domain_catalog::{Book, validate_book};
//!
//! let book = Book::new(
//!     "The Left Hand of Darkness",
//!     vec!["Ursula K. Le Guin".to_string()],
//!     1969,
//!     "Ace Books",
//!     "English",
//!     304,
//! );
//! assert!(validate_book(&book).is_empty());
//! ```

pub mod book;
pub mod listing;
pub mod validation;

pub use book::{Book, BookPatch};
pub use listing::{
    BookFilter, ListOptions, PageMetadata, Pagination, RawListParams, Sort, SortDirection,
    SortField, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, SORT_SAFELIST,
};
pub use validation::{validate_book, ValidationErrors, MAX_AUTHORS, MAX_FIELD_BYTES};
