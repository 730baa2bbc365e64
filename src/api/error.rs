//! Errors surfaced by the API client.
//!
//! `Display` is the user-visible message: containers put it verbatim into
//! their `Error` state.

use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionError;

/// Shown when a transport failure carries no message of its own.
pub const NETWORK_FALLBACK_MESSAGE: &str = "Network error. Please try again.";

/// Errors from a remote operation or the local checks before it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No token in the session store; no request was made.
    #[error("Not authenticated")]
    AuthenticationMissing,

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// The request never produced a response.
    #[error("{0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// Media upload rejected locally; no request was made.
    #[error("File too large. Maximum size is {}", display_limit(.limit))]
    UploadTooLarge { size: u64, limit: u64 },

    #[error("Could not read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Invalid API configuration: {0}")]
    Configuration(String),
}

/// Coarse classification for callers that branch on the failure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AuthenticationMissing,
    RequestFailed,
    NetworkFailure,
    /// Raised before or after the exchange, on this side.
    Local,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::AuthenticationMissing => ErrorKind::AuthenticationMissing,
            ApiError::RequestFailed { .. } => ErrorKind::RequestFailed,
            ApiError::Network(_) => ErrorKind::NetworkFailure,
            ApiError::Decode(_)
            | ApiError::UploadTooLarge { .. }
            | ApiError::File { .. }
            | ApiError::InvalidInput(_)
            | ApiError::Session(_)
            | ApiError::Configuration(_) => ErrorKind::Local,
        }
    }

    /// HTTP status for server rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Wrap a transport fault, falling back to a generic message.
    pub(crate) fn network(err: &reqwest::Error) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            ApiError::Network(NETWORK_FALLBACK_MESSAGE.to_string())
        } else {
            ApiError::Network(message)
        }
    }
}

const MIB: u64 = 1024 * 1024;

/// Whole megabytes, or bytes when the limit is below one megabyte.
fn display_limit(limit: &u64) -> String {
    if *limit >= MIB {
        format!("{}MB", limit.div_ceil(MIB))
    } else {
        format!("{limit} bytes")
    }
}

/// How a non-2xx response becomes an [`ApiError`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum OnFailure {
    /// Fixed per-operation message; the body is ignored.
    Fixed(&'static str),
    /// Surface the server's body; use the fallback when it is empty.
    ServerBody(&'static str),
}

impl OnFailure {
    pub(crate) fn into_error(self, status: u16, body: &[u8]) -> ApiError {
        let message = match self {
            OnFailure::Fixed(message) => message.to_string(),
            OnFailure::ServerBody(fallback) => {
                let text = String::from_utf8_lossy(body).trim().to_string();
                if text.is_empty() {
                    fallback.to_string()
                } else {
                    text
                }
            }
        };
        ApiError::RequestFailed { status, message }
    }
}
