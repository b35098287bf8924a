//! Common error types used across the workspace.
//!
//! Each failure mode is its own typed error; [`HearthError`] aggregates them
//! with `#[from]` conversions so callers can use `?` freely.

/// Top-level error returned by hierarchy operations.
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    /// An id-addressed record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A create or re-link referenced a parent that does not exist.
    #[error(transparent)]
    InvalidParent(#[from] InvalidParentError),

    /// A device type outside the supported set.
    #[error(transparent)]
    InvalidType(#[from] InvalidTypeError),

    /// A field failed format validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The record addressed by id does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up (`"User"`, `"House"`, …).
    pub entity: &'static str,
    /// The id that failed to resolve.
    pub id: String,
}

/// The parent referenced by a child record does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} does not exist")]
pub struct InvalidParentError {
    /// Kind of the missing parent.
    pub entity: &'static str,
    /// The parent id that failed to resolve.
    pub id: String,
}

/// Device type string that is not one of the supported kinds.
#[derive(Debug, thiserror::Error)]
#[error("invalid device type: {0}")]
pub struct InvalidTypeError(pub String);

/// Field-level validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The email address is not of the form `local@domain.tld`.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
