//! Storage-specific error type wrapping sqlx errors.

use quill_domain::error::{ConflictError, QuillError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for QuillError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Map a failed write, turning a unique-constraint violation into a
/// [`ConflictError`] built by `conflict`.
pub(crate) fn map_write_error(
    err: sqlx::Error,
    conflict: impl FnOnce() -> ConflictError,
) -> QuillError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => conflict().into(),
        _ => StorageError::from(err).into(),
    }
}
