//! Error types for the state-manager client

use thiserror::Error;

/// State-manager client error
#[derive(Debug, Error)]
pub enum Error {
    /// Server rejected the request as malformed (HTTP 400)
    #[error("bad input: {0}")]
    BadInput(String),

    /// Resource does not exist (HTTP 404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Concurrent modification detected (HTTP 409)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Any other non-2xx server response
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Network failure, timeout, or cancellation before a response arrived
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request body could not be serialized to JSON
    #[error("request serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Success response carried a malformed JSON body
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// Pending-list pagination failed partway through
    #[error("pending list failed at offset {offset}: {source}")]
    Pagination {
        offset: u32,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// True for the "resource absent" sentinel, including one surfaced
    /// mid-pagination.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::Pagination { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// True when the server reported a concurrent-modification conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }

    /// True when the request was cut off by the client-side deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}

/// Result type for state-manager operations
pub type Result<T> = std::result::Result<T, Error>;
