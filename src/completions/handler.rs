/**
 * Completion Proxy Handler
 *
 * Implements POST /completions. The handler relays the upstream JSON
 * response unmodified; failures are logged with detail and surfaced to
 * the client as a generic 500.
 */
use axum::extract::State;
use serde::Deserialize;
use serde_json::Value;

use crate::completions::client::CompletionError;
use crate::error::ApiError;
use crate::extract::Json;
use crate::server::state::AppState;

/// Completion proxy request
#[derive(Deserialize, Debug)]
pub struct CompletionRequest {
    /// The prompt, forwarded as the sole user turn
    pub message: String,
}

/// Completion proxy handler
///
/// # Errors
///
/// * `400 Bad Request` - missing or malformed request body
/// * `500 Internal Server Error` - API key missing, or the upstream
///   call failed
pub async fn complete(
    State(state): State<AppState>,
    Json(request): Json<CompletionRequest>,
) -> Result<Json<Value>, ApiError> {
    match state.completions.complete(&request.message).await {
        Ok(data) => Ok(Json(data)),
        Err(CompletionError::MissingApiKey) => {
            tracing::error!("Completion API key is not configured");
            Err(ApiError::configuration(
                "Server configuration error: API key not found",
            ))
        }
        Err(e) => {
            tracing::error!("Completion API error: {e}");
            Err(ApiError::completion_failed(e.to_string()))
        }
    }
}
