//! Storage error types.
//!
//! Store adapters map backend failures into [`StorageError`] so the rest of
//! the crate never sees driver types. At the HTTP boundary every variant is
//! reported to the client as a generic internal error; the detail is only
//! logged server-side.

use thiserror::Error;

/// Failure of a persistence operation.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// A query or statement failed (constraint violation, bad row, ...).
    #[error("database operation failed: {0}")]
    Database(String),

    /// The storage backend could not be reached.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Creates a database error from any displayable cause.
    pub fn database(cause: impl std::fmt::Display) -> Self {
        StorageError::Database(cause.to_string())
    }

    /// Creates an unavailable error from any displayable cause.
    pub fn unavailable(cause: impl std::fmt::Display) -> Self {
        StorageError::Unavailable(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_displays_cause() {
        let err = StorageError::database("duplicate key");
        assert_eq!(format!("{}", err), "database operation failed: duplicate key");
    }

    #[test]
    fn unavailable_error_displays_cause() {
        let err = StorageError::unavailable("connection refused");
        assert_eq!(
            format!("{}", err),
            "storage backend unavailable: connection refused"
        );
    }
}
