//! Database error types
//!
//! The repository's failure taxonomy. `NotFound` and `EditConflict` are the
//! two recoverable kinds a caller is expected to branch on; everything else
//! is a store failure surfaced as-is. The repository never retries and never
//! logs; mapping to a transport response happens in the caller.

use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the requested identity. Also returned for ids below 1,
    /// which are treated identically to absent records.
    #[error("record not found")]
    NotFound,

    /// A conditional update matched no row: the record was deleted or a
    /// concurrent writer advanced its version first. The caller must
    /// re-fetch and retry or surface the conflict.
    #[error("unable to update the record due to an edit conflict")]
    EditConflict,

    /// Failed to establish a database connection.
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Unique constraint violation.
    #[error("duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Check or foreign key constraint violation.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// No connection became available within the acquire timeout.
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Any other query failure, including cancellation and I/O errors.
    #[error("query failed: {0}")]
    QueryFailed(String),
}

impl RepositoryError {
    /// Checks if this error indicates a record was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound)
    }

    /// Checks if this error is an optimistic-concurrency conflict.
    pub fn is_edit_conflict(&self) -> bool {
        matches!(self, RepositoryError::EditConflict)
    }

    /// Checks if this error is a constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            RepositoryError::DuplicateEntry(_) | RepositoryError::ConstraintViolation(_)
        )
    }
}

/// Maps SQLx errors onto the repository taxonomy using PostgreSQL error
/// codes (23505 unique, 23503 foreign key, 23514 check).
impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::PoolTimedOut => RepositoryError::PoolExhausted,
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => RepositoryError::DuplicateEntry(db_err.message().to_string()),
                Some("23503") | Some("23514") => {
                    RepositoryError::ConstraintViolation(db_err.message().to_string())
                }
                _ => RepositoryError::QueryFailed(db_err.message().to_string()),
            },
            other => RepositoryError::QueryFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(error.is_not_found());
    }

    #[test]
    fn pool_timeout_maps_to_pool_exhausted() {
        let error = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, RepositoryError::PoolExhausted));
    }

    #[test]
    fn edit_conflict_is_its_own_kind() {
        let error = RepositoryError::EditConflict;
        assert!(error.is_edit_conflict());
        assert!(!error.is_not_found());
    }
}
