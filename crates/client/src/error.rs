//! Unified error handling for API calls.
//!
//! Every catalog call resolves with its payload or rejects with an
//! [`ApiError`]. Errors are logged once, at the HTTP client boundary, and
//! then propagate unchanged; nothing in this crate retries or swallows them.

use reqwest::StatusCode;
use thiserror::Error;

use crate::http::Code;
use crate::session::StorageError;

/// Classification of an [`ApiError`], for callers that only care about the
/// category (e.g. to decide whether to show the login prompt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Transport succeeded but the envelope signalled failure.
    Application,
    /// HTTP 401; the session has been cleared.
    Unauthenticated,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 500.
    Server,
    /// Any other non-success HTTP status.
    Connection,
    /// No response at all (timeout, DNS, refused connection).
    Network,
    /// The response could not be decoded into the expected shape.
    Decode,
    /// The request could not be built or the local session could not be read.
    Client,
    /// The caller cancelled the call.
    Cancelled,
}

/// Error returned by every API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The envelope carried a code outside the accepted success set.
    #[error("{message}")]
    Application {
        /// Code the server sent, if any.
        code: Option<Code>,
        /// Server message, or the default failure message when it was empty.
        message: String,
    },

    /// HTTP 401. The stored session token has already been cleared.
    #[error("Not logged in or session expired, please log in again")]
    Unauthenticated {
        /// Response body.
        body: String,
    },

    /// HTTP 403.
    #[error("Access denied")]
    Forbidden {
        /// Response body.
        body: String,
    },

    /// HTTP 404.
    #[error("Requested resource does not exist")]
    NotFound {
        /// Response body.
        body: String,
    },

    /// HTTP 500.
    #[error("Internal server error")]
    Server {
        /// Response body.
        body: String,
    },

    /// Any other non-success HTTP status.
    #[error("Connection error: HTTP {status}")]
    Connection {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// No response was received.
    #[error("Network error, check your connection: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body was not a valid envelope or payload.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The envelope was successful but `data` was absent or null.
    #[error("Response carried no data")]
    MissingPayload,

    /// The request could not be built (bad path, header or file).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Setup(#[source] reqwest::Error),

    /// Reading or writing the persisted session failed.
    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    /// The call was cancelled before a response was processed.
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Application { .. } => ErrorKind::Application,
            Self::Unauthenticated { .. } => ErrorKind::Unauthenticated,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Server { .. } => ErrorKind::Server,
            Self::Connection { .. } => ErrorKind::Connection,
            Self::Network(_) => ErrorKind::Network,
            Self::Decode(_) | Self::MissingPayload => ErrorKind::Decode,
            Self::Encode(_) | Self::InvalidRequest(_) | Self::Setup(_) | Self::Storage(_) => {
                ErrorKind::Client
            }
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// HTTP status of the failed response, for status-classified errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthenticated { .. } => Some(401),
            Self::Forbidden { .. } => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Server { .. } => Some(500),
            Self::Connection { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the caller should treat the user as logged out.
    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated { .. })
    }

    /// Classify a non-success HTTP status.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthenticated { body },
            StatusCode::FORBIDDEN => Self::Forbidden { body },
            StatusCode::NOT_FOUND => Self::NotFound { body },
            StatusCode::INTERNAL_SERVER_ERROR => Self::Server { body },
            status => Self::Connection {
                status: status.as_u16(),
                body,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let cases = [
            (StatusCode::UNAUTHORIZED, ErrorKind::Unauthenticated),
            (StatusCode::FORBIDDEN, ErrorKind::Forbidden),
            (StatusCode::NOT_FOUND, ErrorKind::NotFound),
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Server),
            (StatusCode::BAD_GATEWAY, ErrorKind::Connection),
            (StatusCode::BAD_REQUEST, ErrorKind::Connection),
        ];
        for (status, kind) in cases {
            let err = ApiError::from_status(status, String::new());
            assert_eq!(err.kind(), kind, "status {status}");
            assert_eq!(err.status(), Some(status.as_u16()));
        }
    }

    #[test]
    fn test_connection_error_message_names_status() {
        let err = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, String::new());
        assert_eq!(err.to_string(), "Connection error: HTTP 503");
    }

    #[test]
    fn test_application_error_displays_server_message() {
        let err = ApiError::Application {
            code: Some(Code::Int(0)),
            message: "out of stock".to_owned(),
        };
        assert_eq!(err.to_string(), "out of stock");
        assert_eq!(err.kind(), ErrorKind::Application);
        assert!(err.status().is_none());
    }
}
