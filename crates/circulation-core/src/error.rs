//! Error types for library operations.

use circulation_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur during library operations.
///
/// Refused checkouts and check-ins are not errors; they are reported through
/// the outcome types. Only a failed store write or read ends up here.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Persistence error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, LibraryError>;
