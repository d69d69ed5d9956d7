//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`QuillError`]
//! via `#[from]`. Adapters box their own error types into
//! [`QuillError::Storage`] so the domain never names a driver.

/// Top-level error returned by services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum QuillError {
    /// A draft or an identifier failed a presence/format check.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// A write was rejected by a uniqueness rule.
    #[error("uniqueness conflict")]
    Conflict(#[from] ConflictError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Presence and format violations detected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was empty or whitespace only.
    #[error("field `{field}` must not be empty")]
    EmptyField { field: &'static str },

    /// A path identifier could not be parsed as a record id.
    #[error("invalid {entity} id: {value:?}")]
    InvalidId { entity: &'static str, value: String },
}

/// Raised when a lookup by id finds nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// Raised when a unique column already holds the submitted value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} with {field} {value:?} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub field: &'static str,
    pub value: String,
}

/// Reject empty or whitespace-only values for a required field.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] naming `field`.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}
