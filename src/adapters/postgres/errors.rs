//! Classification of sqlx errors into domain errors.

use crate::domain::foundation::{DomainError, ErrorCode};

/// True when the driver reports a unique constraint violation.
pub(super) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Wraps an unclassified driver error, naming the operation that failed.
pub(super) fn storage_failure(operation: &'static str, err: sqlx::Error) -> DomainError {
    tracing::error!(operation, error = %err, "database operation failed");
    DomainError::database(operation, err)
}

/// Maps a unique violation to `on_conflict`, anything else to a storage failure.
pub(super) fn classify_insert(
    operation: &'static str,
    err: sqlx::Error,
    on_conflict: impl FnOnce() -> DomainError,
) -> DomainError {
    if is_unique_violation(&err) {
        on_conflict()
    } else {
        storage_failure(operation, err)
    }
}

/// A stored value that no longer satisfies the domain invariants.
pub(super) fn corrupt_row(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} value in database: {}", column, err),
    )
}
