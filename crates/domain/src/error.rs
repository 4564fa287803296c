//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`LogicError`]
//! via `#[from]`. Adapters map the three variants onto their own surface
//! (the HTTP adapter turns them into 400 / 404 / 500 responses).

/// Top-level error for the logic service.
#[derive(Debug, thiserror::Error)]
pub enum LogicError {
    /// A create/update payload violated a field-level rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An operation addressed a nonexistent record.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Field-level validation failures on incoming payloads.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` was missing or the empty string.
    #[error("name: this field may not be blank")]
    EmptyName,

    /// `name` exceeded the 255 character cap.
    #[error("name: ensure this field has no more than 255 characters (got {len})")]
    NameTooLong {
        /// Character count of the rejected value.
        len: usize,
    },
}

/// A lookup by identifier matched no record.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Entity type name (`"Restaurant"` or `"Menu"`).
    pub entity: &'static str,
    /// String form of the identifier that was looked up.
    pub id: String,
}
