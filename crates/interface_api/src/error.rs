//! API error handling
//!
//! Maps domain and repository failures onto HTTP responses. The mapping is
//! fixed: validation errors are 422 with the field map, missing records are
//! 404, optimistic-concurrency conflicts are 409, and everything else is a
//! 500 whose details are logged but not leaked to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use domain_catalog::ValidationErrors;
use infra_db::RepositoryError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("the requested resource could not be found")]
    NotFound,

    #[error("unable to update the record due to an edit conflict, please try again")]
    EditConflict,

    #[error("the request contains invalid fields")]
    Validation(ValidationErrors),

    #[error("internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Internal(detail) => {
                error!(%detail, "request failed");
                "the server encountered a problem and could not process your request".to_string()
            }
            other => other.to_string(),
        };

        let (status, fields) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, None),
            ApiError::EditConflict => (StatusCode::CONFLICT, None),
            ApiError::Validation(errors) => (StatusCode::UNPROCESSABLE_ENTITY, Some(errors)),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        let body = ErrorResponse {
            error: message,
            fields,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApiError::NotFound,
            RepositoryError::EditConflict => ApiError::EditConflict,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_expected_statuses() {
        let cases = [
            (RepositoryError::NotFound, StatusCode::NOT_FOUND),
            (RepositoryError::EditConflict, StatusCode::CONFLICT),
            (
                RepositoryError::QueryFailed("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                RepositoryError::PoolExhausted,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn validation_errors_map_to_unprocessable_entity() {
        let mut errors = ValidationErrors::new();
        errors.add("title", "must be provided");

        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
