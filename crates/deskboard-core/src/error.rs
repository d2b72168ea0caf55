//! Error types for deskboard-core

use thiserror::Error;

/// Result type alias using deskboard-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in deskboard-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Remote read failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Remote write failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Transactional precondition violated (target document missing)
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
