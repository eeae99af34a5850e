//! Error types for remote synchronization.

use thiserror::Error;

/// Errors that can occur while talking to the remote store.
///
/// A missing document is not an error: lookups return `Option` and an
/// absent document means an empty inventory. [`SyncError::Status`] is a
/// hard failure and stays distinct from that case.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SyncError {
    /// Network-level failure (connect, TLS, body read).
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote answered with a non-success HTTP status.
    #[error("remote returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, when readable.
        message: String,
    },

    /// The remote document body did not decode into items.
    #[error("decode error: {0}")]
    Decode(String),

    /// The item list could not be encoded for upload.
    #[error("encode error: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
