//! Error types for the session core.
//!
//! ERROR HANDLING
//! ==============
//! I/O failures stop at the store boundary. [`AuthError`] renders directly as
//! the message shown next to a form, so UI code never formats transport
//! errors itself. Token and storage errors stay internal to restoration and
//! are logged rather than surfaced.

/// Failure to decode the claims embedded in a bearer token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token does not have three dot-separated segments")]
    Malformed,
    #[error("token payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token has no `exp` claim")]
    MissingExpiry,
}

/// Failure to read or write durable session storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage write rejected for `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to deliver a request or read its response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response body could not be read: {0}")]
    Body(String),
}

/// User-facing outcome of a failed login or registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server rejected the request; the message comes from its error body.
    #[error("{0}")]
    Rejected(String),
    #[error("Network error. Please try again.")]
    Network,
    #[error("Unexpected response from server.")]
    UnexpectedResponse,
    #[error("Could not save your session.")]
    Storage,
    /// A logout or newer login started while this login was in flight.
    #[error("Sign-in was cancelled.")]
    Superseded,
}

/// Failure of an authenticated API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("session expired")]
    Expired,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("response body did not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
}
