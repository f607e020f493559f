/**
 * Application State Management
 *
 * This module defines the application state structure shared by all
 * request handlers, and the `FromRef` implementations that let handlers
 * extract just the piece they need.
 *
 * # Thread Safety
 *
 * Every field is an `Arc` to an immutable (or internally synchronized)
 * service, so the state clones cheaply per request and there is no
 * shared mutable in-process state to protect.
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::sessions::TokenService;
use crate::auth::users::UserStore;
use crate::completions::client::CompletionClient;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `users` - credential store (PostgreSQL in production, in-memory in
///   tests)
/// * `tokens` - session token service holding the injected secret
/// * `completions` - client for the external completion service
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserStore>,
    /// Session token service
    pub tokens: Arc<TokenService>,
    /// Completion service client
    pub completions: Arc<CompletionClient>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: TokenService,
        completions: CompletionClient,
    ) -> Self {
        Self {
            users,
            tokens: Arc::new(tokens),
            completions: Arc::new(completions),
        }
    }

    /// State backed by the in-memory store, for handler unit tests
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(
            Arc::new(crate::auth::users::MemoryUserStore::new()),
            TokenService::new("test-secret"),
            CompletionClient::new(None),
        )
    }
}

/// Allow handlers to extract the credential store directly
impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(state: &AppState) -> Self {
        state.users.clone()
    }
}

/// Allow handlers to extract the token service directly
impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

/// Allow handlers to extract the completion client directly
impl FromRef<AppState> for Arc<CompletionClient> {
    fn from_ref(state: &AppState) -> Self {
        state.completions.clone()
    }
}
