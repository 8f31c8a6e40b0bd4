//! Book entity and partial-update structure
//!
//! A [`Book`] is the single managed entity of the catalog. Three of its
//! fields are owned by the store and never set by callers:
//!
//! - `id` is assigned at insertion and immutable afterwards
//! - `created_at` is set once at insertion
//! - `version` starts at 1 and is incremented by the store on every
//!   successful update; it is the optimistic-lock token compared by the
//!   repository's conditional update
//!
//! [`BookPatch`] carries a caller's partial update: each field is either
//! present (replace) or absent (keep the current value). The patch is applied
//! to a freshly fetched entity before validation, so the full rule set always
//! runs against the complete post-update state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog record for a single book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned identity, immutable after creation.
    pub id: i64,
    /// Set by the store at insertion, never mutated.
    pub created_at: DateTime<Utc>,
    pub title: String,
    /// Ordered author list; order is preserved through storage round-trips.
    pub authors: Vec<String>,
    pub year: i32,
    pub publisher: String,
    pub language: String,
    pub pages: i32,
    /// Optimistic-lock token. Incremented by the store on every update.
    pub version: i32,
}

impl Book {
    /// Creates a draft book from caller-supplied fields.
    ///
    /// `id`, `created_at`, and `version` hold placeholder values until the
    /// repository inserts the draft and returns the completed entity.
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        year: i32,
        publisher: impl Into<String>,
        language: impl Into<String>,
        pages: i32,
    ) -> Self {
        Self {
            id: 0,
            created_at: Utc::now(),
            title: title.into(),
            authors,
            year,
            publisher: publisher.into(),
            language: language.into(),
            pages,
            version: 0,
        }
    }
}

/// A partial update to a [`Book`].
///
/// `Some` means "replace with this value", `None` means "leave unchanged".
/// This makes the present/absent distinction explicit instead of relying on
/// zero values, so a caller can legitimately patch a field to an empty string
/// and have validation reject it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub year: Option<i32>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i32>,
}

impl BookPatch {
    /// Copies every present field onto `book`, leaving absent fields intact.
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(authors) = self.authors {
            book.authors = authors;
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(publisher) = self.publisher {
            book.publisher = publisher;
        }
        if let Some(language) = self.language {
            book.language = language;
        }
        if let Some(pages) = self.pages {
            book.pages = pages;
        }
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.authors.is_none()
            && self.year.is_none()
            && self.publisher.is_none()
            && self.language.is_none()
            && self.pages.is_none()
    }
}
