//! Book DTOs
//!
//! Request bodies mirror the original wire contract: creation fields default
//! to their zero values when omitted (the validator turns those into
//! "must be provided" errors), while update fields distinguish absent from
//! present so a partial update leaves unmentioned fields untouched.

use serde::{Deserialize, Serialize};

use domain_catalog::{Book, BookPatch, PageMetadata, RawListParams};

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub pages: i32,
}

impl CreateBookRequest {
    /// Builds the draft entity handed to validation and the repository.
    pub fn into_draft(self) -> Book {
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

#[derive(Debug, Default, Deserialize)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub year: Option<i32>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub pages: Option<i32>,
}

impl UpdateBookRequest {
    pub fn into_patch(self) -> BookPatch {
        BookPatch {
            title: self.title,
            authors: self.authors,
            year: self.year,
            publisher: self.publisher,
            language: self.language,
            pages: self.pages,
        }
    }
}

/// Raw list-query parameters. Everything is accepted as a string here; the
/// domain resolver does the parsing and validation.
#[derive(Debug, Default, Deserialize)]
pub struct ListBooksQuery {
    pub title: Option<String>,
    pub authors: Option<String>,
    pub publisher: Option<String>,
    pub language: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
}

impl ListBooksQuery {
    pub fn into_raw(self) -> RawListParams {
        RawListParams {
            title: self.title,
            authors: self.authors,
            publisher: self.publisher,
            language: self.language,
            page: self.page,
            page_size: self.page_size,
            sort: self.sort,
        }
    }
}

/// A book as presented on the wire. `created_at` is internal and omitted.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    pub publisher: String,
    pub language: String,
    pub pages: i32,
    pub version: i32,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            authors: book.authors,
            year: book.year,
            publisher: book.publisher,
            language: book.language,
            pages: book.pages,
            version: book.version,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookEnvelope {
    pub book: BookResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageEnvelope {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub books: Vec<BookResponse>,
    pub metadata: PageMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_create_fields_default_to_zero_values() {
        let request: CreateBookRequest =
            serde_json::from_str(r#"{"title": "Solaris"}"#).unwrap();

        let draft = request.into_draft();
        assert_eq!(draft.title, "Solaris");
        assert!(draft.authors.is_empty());
        assert_eq!(draft.year, 0);
        assert_eq!(draft.pages, 0);
    }

    #[test]
    fn update_request_distinguishes_absent_from_present() {
        let request: UpdateBookRequest =
            serde_json::from_str(r#"{"pages": 300}"#).unwrap();

        let patch = request.into_patch();
        assert_eq!(patch.pages, Some(300));
        assert!(patch.title.is_none());
        assert!(patch.authors.is_none());
    }

    #[test]
    fn book_response_omits_created_at() {
        let book = Book::new(
            "Solaris",
            vec!["Stanisław Lem".to_string()],
            1961,
            "Wydawnictwo MON",
            "Polish",
            204,
        );

        let json = serde_json::to_value(BookResponse::from(book)).unwrap();
        assert!(json.get("created_at").is_none());
        assert_eq!(json["title"], "Solaris");
    }
}
