//! Book handlers
//!
//! Thin adapters over the repository: decode, validate, delegate, encode.
//! The update flow follows fetch → patch → validate → conditional update; a
//! lost optimistic-concurrency race surfaces to the client as 409.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use domain_catalog::validate_book;

use crate::dto::books::{
    BookEnvelope, BookListResponse, CreateBookRequest, ListBooksQuery, MessageEnvelope,
    UpdateBookRequest,
};
use crate::error::ApiError;
use crate::AppState;

/// Creates a new book.
pub async fn create_book(
    State(state): State<AppState>,
    Json(request): Json<CreateBookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = request.into_draft();

    let errors = validate_book(&draft);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let book = state.books.insert(&draft).await?;
    let location = format!("/v1/books/{}", book.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookEnvelope { book: book.into() }),
    ))
}

/// Fetches a book by id.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BookEnvelope>, ApiError> {
    let book = state.books.get(id).await?;
    Ok(Json(BookEnvelope { book: book.into() }))
}

/// Partially updates a book.
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBookRequest>,
) -> Result<Json<BookEnvelope>, ApiError> {
    let mut book = state.books.get(id).await?;

    request.into_patch().apply(&mut book);

    let errors = validate_book(&book);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let book = state.books.update(&book).await?;
    Ok(Json(BookEnvelope { book: book.into() }))
}

/// Deletes a book by id.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageEnvelope>, ApiError> {
    state.books.delete(id).await?;
    Ok(Json(MessageEnvelope {
        message: "book successfully deleted".to_string(),
    }))
}

/// Lists books with filtering, sorting, and pagination.
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<ListBooksQuery>,
) -> Result<Json<BookListResponse>, ApiError> {
    let (filter, options) = query.into_raw().resolve()?;

    let (books, metadata) = state.books.list(&filter, &options).await?;

    Ok(Json(BookListResponse {
        books: books.into_iter().map(Into::into).collect(),
        metadata,
    }))
}
