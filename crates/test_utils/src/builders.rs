//! Test Data Builders
//!
//! Builder types producing valid domain entities with sensible defaults.
//! Tests override only the fields they care about.

use domain_catalog::Book;

/// Builder for book drafts.
///
/// The default configuration passes validation; every `with_` method
/// replaces one field.
pub struct TestBookBuilder {
    title: String,
    authors: Vec<String>,
    year: i32,
    publisher: String,
    language: String,
    pages: i32,
}

impl Default for TestBookBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBookBuilder {
    /// Creates a new builder with valid default values.
    pub fn new() -> Self {
        Self {
            title: "The Dispossessed".to_string(),
            authors: vec!["Ursula K. Le Guin".to_string()],
            year: 1974,
            publisher: "Harper & Row".to_string(),
            language: "English".to_string(),
            pages: 341,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_pages(mut self, pages: i32) -> Self {
        self.pages = pages;
        self
    }

    /// Builds the draft entity.
    pub fn build(self) -> Book {
        Book::new(
            self.title,
            self.authors,
            self.year,
            self.publisher,
            self.language,
            self.pages,
        )
    }
}
