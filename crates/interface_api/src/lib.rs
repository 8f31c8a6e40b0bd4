//! HTTP API Layer
//!
//! The REST adapter for the catalog. This crate is deliberately thin: it
//! decodes requests, delegates every decision to `domain_catalog` and
//! `infra_db`, and maps outcomes to HTTP responses.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_db::BookRepository;

use crate::handlers::{books, health};

/// Application state shared across handlers.
///
/// Handlers talk to the repository; the raw pool is kept only for the
/// readiness probe's connectivity check.
#[derive(Clone)]
pub struct AppState {
    pub books: BookRepository,
    pub pool: PgPool,
}

/// Creates the main API router.
pub fn create_router(pool: PgPool) -> Router {
    let state = AppState {
        books: BookRepository::new(pool.clone()),
        pool,
    };

    let book_routes = Router::new()
        .route("/", post(books::create_book).get(books::list_books))
        .route(
            "/:id",
            get(books::get_book)
                .patch(books::update_book)
                .delete(books::delete_book),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/v1/books", book_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
