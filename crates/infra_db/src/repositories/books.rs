//! Book repository implementation
//!
//! Create/Get/Update/Delete plus filtered, paginated listing over the
//! `books` table.
//!
//! # Optimistic concurrency
//!
//! Updates are conditioned on the version the caller read at fetch time:
//!
//! ```sql
//! UPDATE books SET ..., version = version + 1
//! WHERE id = $7 AND version = $8
//! ```
//!
//! in one atomic statement. Zero matched rows means the record vanished or a
//! concurrent writer advanced the version first; both surface as
//! [`RepositoryError::EditConflict`]. There is no other coordination
//! mechanism and no automatic retry.
//!
//! # Dynamic ordering
//!
//! The list query's ORDER BY column and direction are interpolated from
//! [`domain_catalog::Sort`], whose members are static strings produced by an
//! exact safe-list match in the resolver. Raw input never reaches the
//! clause. All filter values and pagination bounds are bound parameters.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use domain_catalog::{Book, BookFilter, ListOptions, PageMetadata};

use crate::error::RepositoryError;

/// Repository for catalog book records.
///
/// Holds an injected connection pool; cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: PgPool,
}

impl BookRepository {
    /// Creates a new repository backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a validated draft and returns the completed entity with its
    /// store-assigned `id`, `created_at`, and `version` of 1.
    pub async fn insert(&self, book: &Book) -> Result<Book, RepositoryError> {
        let row: BookRow = sqlx::query_as(
            r#"
            INSERT INTO books (title, authors, year, publisher, language, pages)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, created_at, title, authors, year, publisher, language, pages, version
            "#,
        )
        .bind(&book.title)
        .bind(&book.authors)
        .bind(book.year)
        .bind(&book.publisher)
        .bind(&book.language)
        .bind(book.pages)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Fetches a book by id.
    ///
    /// Ids below 1 cannot exist and fail with `NotFound` without a store
    /// round-trip.
    pub async fn get(&self, id: i64) -> Result<Book, RepositoryError> {
        if id < 1 {
            return Err(RepositoryError::NotFound);
        }

        let row: Option<BookRow> = sqlx::query_as(
            r#"
            SELECT id, created_at, title, authors, year, publisher, language, pages, version
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Book::from).ok_or(RepositoryError::NotFound)
    }

    /// Applies a conditional update and returns the refreshed entity.
    ///
    /// `book.version` must be the version read at fetch time. Fails with
    /// `EditConflict` when no row matches both id and expected version.
    pub async fn update(&self, book: &Book) -> Result<Book, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(
            r#"
            UPDATE books
            SET title = $1, authors = $2, year = $3, publisher = $4, language = $5, pages = $6,
                version = version + 1
            WHERE id = $7 AND version = $8
            RETURNING id, created_at, title, authors, year, publisher, language, pages, version
            "#,
        )
        .bind(&book.title)
        .bind(&book.authors)
        .bind(book.year)
        .bind(&book.publisher)
        .bind(&book.language)
        .bind(book.pages)
        .bind(book.id)
        .bind(book.version)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Book::from).ok_or(RepositoryError::EditConflict)
    }

    /// Deletes a book by id. Deleting an absent record is `NotFound`, not a
    /// no-op success.
    pub async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        if id < 1 {
            return Err(RepositoryError::NotFound);
        }

        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Lists books matching `filter`, sorted and paginated per `options`.
    ///
    /// Empty filter values render as always-true predicates. The total
    /// matching count (ignoring pagination, honoring filters) is computed in
    /// the same query via a window count; an empty page is a valid outcome.
    pub async fn list(
        &self,
        filter: &BookFilter,
        options: &ListOptions,
    ) -> Result<(Vec<Book>, PageMetadata), RepositoryError> {
        // Sort column and direction come from the resolver's safe-list; the
        // secondary id key keeps pagination deterministic across equal values.
        let query = format!(
            r#"
            SELECT count(*) OVER() AS total_records,
                   id, created_at, title, authors, year, publisher, language, pages, version
            FROM books
            WHERE (title ILIKE '%' || $1 || '%' OR $1 = '')
              AND (authors @> $2 OR $2 = '{{}}')
              AND (publisher = $3 OR $3 = '')
              AND (language = $4 OR $4 = '')
            ORDER BY {} {}, id ASC
            LIMIT $5 OFFSET $6
            "#,
            options.sort.field.column(),
            options.sort.direction.sql(),
        );

        let rows: Vec<ListRow> = sqlx::query_as(&query)
            .bind(&filter.title)
            .bind(&filter.authors)
            .bind(&filter.publisher)
            .bind(&filter.language)
            .bind(options.pagination.limit())
            .bind(options.pagination.offset())
            .fetch_all(&self.pool)
            .await?;

        let total_records = rows.first().map_or(0, |row| row.total_records);
        let metadata = PageMetadata::calculate(
            total_records,
            options.pagination.page,
            options.pagination.page_size,
        );
        let books = rows.into_iter().map(ListRow::into_book).collect();

        Ok((books, metadata))
    }
}

/// Database row representation of a book.
#[derive(Debug, Clone, FromRow)]
struct BookRow {
    id: i64,
    created_at: DateTime<Utc>,
    title: String,
    authors: Vec<String>,
    year: i32,
    publisher: String,
    language: String,
    pages: i32,
    version: i32,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            created_at: row.created_at,
            title: row.title,
            authors: row.authors,
            year: row.year,
            publisher: row.publisher,
            language: row.language,
            pages: row.pages,
            version: row.version,
        }
    }
}

/// A list-query row: the window total alongside the book columns.
#[derive(Debug, Clone, FromRow)]
struct ListRow {
    total_records: i64,
    id: i64,
    created_at: DateTime<Utc>,
    title: String,
    authors: Vec<String>,
    year: i32,
    publisher: String,
    language: String,
    pages: i32,
    version: i32,
}

impl ListRow {
    fn into_book(self) -> Book {
        Book {
            id: self.id,
            created_at: self.created_at,
            title: self.title,
            authors: self.authors,
            year: self.year,
            publisher: self.publisher,
            language: self.language,
            pages: self.pages,
            version: self.version,
        }
    }
}
