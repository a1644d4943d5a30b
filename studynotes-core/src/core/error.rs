//! Error types for the Studynotes core library.

use thiserror::Error;

/// All errors that can occur within the Studynotes core library.
///
/// A note id that matches nothing is *not* an error: lookups return
/// `Option`/`bool` absence values instead. These variants cover environment
/// failures only (storage, serialization).
#[derive(Debug, Error)]
pub enum StudynotesError {
    /// A SQLite operation failed.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The opened file is not a valid Studynotes store.
    #[error("Invalid store: {0}")]
    InvalidStore(String),

    /// An I/O operation on the filesystem failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored note data could not be serialized or deserialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias that pins the error type to [`StudynotesError`].
pub type Result<T> = std::result::Result<T, StudynotesError>;

impl StudynotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Database(e) => format!("Failed to save: {e}"),
            Self::InvalidStore(_) => "Could not open note store file".to_string(),
            Self::Io(e) => format!("File error: {e}"),
            Self::Json(e) => format!("Data format error: {e}"),
        }
    }
}
