/**
 * API Error Types
 *
 * This module defines the error taxonomy for the backend. Every handler
 * returns `Result<_, ApiError>`, and each variant maps to exactly one
 * HTTP status code.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * Client errors carry a specific message that is safe to return:
 * - `Validation` - the request body failed a validation rule
 * - `Conflict` - the credential store rejected a duplicate identity
 * - `NotFound` - no user record matches the request
 * - `Unauthorized` - the session token is missing or invalid
 *
 * ## Server errors
 *
 * Server errors never leak detail to the client:
 * - `Configuration` - a required runtime configuration value is absent
 * - `Internal` - store I/O, password hashing, or token signing failed;
 *   the detail is logged and a generic message is returned
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::users::StoreError;

/// Backend error taxonomy
///
/// Each variant corresponds to one class of failure and one HTTP status
/// code. Construct variants through the helper methods rather than
/// directly, so internal detail and client-visible messages stay
/// separated.
///
/// # Usage
///
/// ```rust
/// use chatrelay::error::ApiError;
///
/// let err = ApiError::validation("Invalid email address");
/// assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed a validation rule (400)
    #[error("{0}")]
    Validation(String),

    /// The credential store rejected a duplicate username or email (400)
    #[error("{0}")]
    Conflict(String),

    /// No user record matches the request (404)
    #[error("{0}")]
    NotFound(String),

    /// The session token is missing, malformed, or has a bad signature (401)
    #[error("{0}")]
    Unauthorized(String),

    /// A required runtime configuration value is absent (500)
    ///
    /// The message is client-visible: it names the missing capability,
    /// never the variable's value.
    #[error("{0}")]
    Configuration(String),

    /// Store I/O, password hashing, or token signing failed (500)
    ///
    /// `detail` is logged server-side; `public` is the only text the
    /// client ever sees.
    #[error("internal error: {detail}")]
    Internal {
        /// Server-side detail, logged but never returned
        detail: String,
        /// Generic client-visible message
        public: &'static str,
    },
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a conflict error (400)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an unauthorized error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Create a configuration error (500)
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an internal error (500) with server-side detail
    ///
    /// The client receives the generic "Internal server error" message.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
            public: "Internal server error",
        }
    }

    /// Create an internal error (500) for a failed completion-proxy call
    ///
    /// Same semantics as [`ApiError::internal`], but the client-visible
    /// message matches the proxy endpoint's contract.
    pub fn completion_failed(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
            public: "Failed to get completion",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Configuration(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-visible error message
    ///
    /// For `Internal` errors this is the generic public message; the
    /// detail stays server-side.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Conflict(message)
            | Self::NotFound(message)
            | Self::Unauthorized(message)
            | Self::Configuration(message) => message.clone(),
            Self::Internal { public, .. } => (*public).to_string(),
        }
    }
}

/// Convert a credential-store error into an API error
///
/// Duplicate-identity rejections become client-visible conflicts; any
/// other store failure is an internal error whose detail is kept
/// server-side.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(message) => Self::Conflict(message),
            StoreError::Backend(e) => Self::internal(format!("store error: {e}")),
        }
    }
}
