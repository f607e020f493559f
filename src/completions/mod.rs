//! Completions Module
//!
//! Thin proxy to the OpenAI chat-completion API. The client forwards a
//! single user message to a fixed model with a fixed output cap and
//! relays the upstream JSON response unmodified.
//!
//! # Module Structure
//!
//! ```text
//! completions/
//! ├── mod.rs     - Module exports
//! ├── client.rs  - Upstream HTTP client
//! └── handler.rs - POST /completions handler
//! ```

/// Upstream completion-service client
pub mod client;

/// HTTP handler for the proxy endpoint
pub mod handler;

// Re-export commonly used types
pub use client::{CompletionClient, CompletionError};
pub use handler::complete;
