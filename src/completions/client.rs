/**
 * Completion Service Client
 *
 * HTTP client for the external chat-completion API. The model and
 * output-length cap are fixed; the caller only supplies the prompt.
 *
 * The base URL is injectable so tests can point the client at a local
 * mock server. The bearer credential comes from process configuration
 * and may legitimately be absent, in which case every call fails fast
 * with `MissingApiKey` before any network I/O.
 */
use std::time::Instant;

use serde_json::{json, Value};
use thiserror::Error;

/// Production API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// Model every proxied request is bound to
pub const COMPLETION_MODEL: &str = "gpt-3.5-turbo";

/// Output-length cap for proxied requests
const MAX_COMPLETION_TOKENS: u32 = 100;

/// Completion proxy errors
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API credential is configured; checked before any call
    #[error("completion API key is not configured")]
    MissingApiKey,

    /// Transport or response-parse failure talking to the upstream
    #[error("completion request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Client for the external completion service
pub struct CompletionClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl CompletionClient {
    /// Create a client against the production API
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_API_BASE)
    }

    /// Create a client against an arbitrary base URL (used by tests)
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Forward a prompt as the sole user turn and relay the raw response
    ///
    /// # Errors
    ///
    /// * `MissingApiKey` - no credential configured (no call is made)
    /// * `Upstream` - the request failed or the body was not JSON
    pub async fn complete(&self, message: &str) -> Result<Value, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let body = json!({
            "model": COMPLETION_MODEL,
            "messages": [{ "role": "user", "content": message }],
            "max_tokens": MAX_COMPLETION_TOKENS,
        });

        let started = Instant::now();
        let response = self
            .http
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;
        let data = response.json::<Value>().await?;

        tracing::info!(
            "Completion API response time: {}ms",
            started.elapsed().as_millis()
        );

        Ok(data)
    }
}
