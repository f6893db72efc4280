//! Status-code dispatch and body decoding for state-manager responses

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Error envelope the server sends alongside non-2xx statuses. Optional:
/// plain-text bodies are tolerated via the lossy fallback below.
#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

/// Map a non-2xx status to the error taxonomy. 2xx passes through.
pub(crate) fn check_status(status: StatusCode, body: &[u8]) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    let message = error_message(body);
    Err(match status {
        StatusCode::BAD_REQUEST => Error::BadInput(message),
        StatusCode::NOT_FOUND => Error::NotFound(message),
        StatusCode::CONFLICT => Error::Conflict(message),
        _ => Error::Server {
            status: status.as_u16(),
            message,
        },
    })
}

/// Decode a successful response body into the caller's type. A malformed
/// success payload is a distinct error, never swallowed.
pub(crate) fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    check_status(status, body)?;
    serde_json::from_slice(body).map_err(Error::Decode)
}

/// Check status only, discarding any body (delete, no-content responses).
pub(crate) fn expect_no_body(status: StatusCode, body: &[u8]) -> Result<()> {
    check_status(status, body)
}

/// Best-effort diagnostic text from an error body: the JSON envelope when it
/// parses, otherwise the raw bytes as lossy UTF-8.
fn error_message(body: &[u8]) -> String {
    if let Ok(envelope) = serde_json::from_slice::<ApiError>(body) {
        if !envelope.error.is_empty() {
            return envelope.error;
        }
    }
    String::from_utf8_lossy(body).trim().to_string()
}
