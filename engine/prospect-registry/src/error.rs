//! Error types for dataset loading

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors that can occur while loading the prospect dataset
///
/// Query operations never produce errors; a miss is an absent value.
/// Loading is the only fallible path and a failure there is fatal to
/// the calling process.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// I/O errors reading the dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in the dataset file
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
