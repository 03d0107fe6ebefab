//! Client error types with HTTP status classification.
//!
//! [`ApiError`] is the central error type for the crate. Every failed
//! operation surfaces as one of its variants; nothing is recovered or
//! retried inside the client. The view layer turns an [`ApiError`] into a
//! user-facing message via [`ApiError::display_message`].

use serde::Deserialize;

/// Structured JSON error body as emitted by the backend.
///
/// All backend error responses follow this shape:
/// ```json
/// {
///   "message": "Erro de validação",
///   "details": "{title=Title não pode ser nulo ou vazio}",
///   "status": 400,
///   "timestamp": "2026-08-05T12:00:00"
/// }
/// ```
///
/// Every field is optional on the wire; a response with no usable body is
/// still classified by its HTTP status alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Additional detail, e.g. stringified field violations on 400.
    #[serde(default)]
    pub details: Option<String>,
    /// HTTP status echoed by the backend.
    #[serde(default)]
    pub status: Option<u16>,
}

/// Client-side error enum classifying every way an operation can fail.
///
/// # Classification
///
/// | Variant      | Source                                   |
/// |--------------|------------------------------------------|
/// | `Transport`  | No HTTP response reached the caller      |
/// | `NotFound`   | HTTP 404                                 |
/// | `Validation` | HTTP 400 / 422 with field-level detail   |
/// | `Client`     | Any other 400–499                        |
/// | `Server`     | 500–599                                  |
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connection refused,
    /// timeout, undecodable body).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The resource does not exist or was soft-deleted.
    #[error("resource not found")]
    NotFound {
        /// Message from the response body, if any.
        message: Option<String>,
    },

    /// The backend rejected the payload (HTTP 400 or 422).
    #[error("validation rejected with status {status}")]
    Validation {
        /// HTTP status (400 or 422).
        status: u16,
        /// Message from the response body, if any.
        message: Option<String>,
        /// Server-reported field errors, stringified by the backend.
        details: Option<String>,
    },

    /// Any other client-side rejection in the 400–499 range.
    #[error("client error with status {status}")]
    Client {
        /// HTTP status.
        status: u16,
        /// Message from the response body, if any.
        message: Option<String>,
    },

    /// Backend failure in the 500–599 range.
    #[error("server error with status {status}")]
    Server {
        /// HTTP status.
        status: u16,
        /// Message from the response body, if any.
        message: Option<String>,
    },
}

impl ApiError {
    /// Classifies an HTTP response status plus its (possibly absent) error
    /// body into the matching variant.
    #[must_use]
    pub fn from_status(status: u16, body: Option<ErrorBody>) -> Self {
        let body = body.unwrap_or_default();
        match status {
            404 => Self::NotFound {
                message: body.message,
            },
            400 | 422 => Self::Validation {
                status,
                message: body.message,
                details: body.details,
            },
            400..=499 => Self::Client {
                status,
                message: body.message,
            },
            _ => Self::Server {
                status,
                message: body.message,
            },
        }
    }

    /// Returns the HTTP status this error was classified from, if an HTTP
    /// response was reached at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(_) => None,
            Self::NotFound { .. } => Some(404),
            Self::Validation { status, .. }
            | Self::Client { status, .. }
            | Self::Server { status, .. } => Some(*status),
        }
    }

    /// Returns `true` for the 404 refinement.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Derives the user-facing message for this error.
    ///
    /// Precedence, first match wins:
    /// 1. structured `message` from the response body;
    /// 2. generic transport message if no HTTP response was reached;
    /// 3. `"server error"` for status ≥500;
    /// 4. `"bad request"` for status 400–499;
    /// 5. generic fallback.
    ///
    /// The order is a contract: it decides which message the user sees.
    #[must_use]
    pub fn display_message(&self) -> String {
        if let Some(message) = self.body_message()
            && !message.is_empty()
        {
            return message.to_string();
        }
        match self {
            Self::Transport(_) => "could not reach the server".to_string(),
            Self::Server { .. } => "server error".to_string(),
            Self::NotFound { .. } | Self::Validation { .. } => "bad request".to_string(),
            Self::Client { status, .. } if (400..=499).contains(status) => {
                "bad request".to_string()
            }
            Self::Client { .. } => "request failed".to_string(),
        }
    }

    /// The structured message carried in the response body, if any.
    fn body_message(&self) -> Option<&str> {
        match self {
            Self::Transport(_) => None,
            Self::NotFound { message }
            | Self::Validation { message, .. }
            | Self::Client { message, .. }
            | Self::Server { message, .. } => message.as_deref(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
