/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for `ApiError`,
 * allowing handlers to return errors directly.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message"
 * }
 * ```
 *
 * Internal errors are logged here with their server-side detail before
 * the generic message is serialized, so no call site can forget to log.
 */
use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// The status code comes from `status_code()` and the body is a JSON
    /// object holding the client-visible message. Internal detail is
    /// logged at error level and never serialized.
    fn into_response(self) -> Response {
        if let ApiError::Internal { ref detail, .. } = self {
            tracing::error!("internal error: {detail}");
        }

        let status = self.status_code();
        let body = serde_json::json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}
