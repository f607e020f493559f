//! ChatRelay - Backend Library
//!
//! ChatRelay is a minimal web backend providing user registration,
//! login, and session management via signed tokens in cookies, plus a
//! proxy endpoint to the OpenAI chat-completion API.
//!
//! # Overview
//!
//! The library provides:
//! - Registration and login with bcrypt-hashed credentials
//! - Stateless JWT sessions carried in an HttpOnly cookie
//! - A PostgreSQL-backed credential store behind a trait, with an
//!   in-memory substitute for tests
//! - A thin completion proxy that relays the upstream response
//!
//! # Module Structure
//!
//! The library is organized into four main modules:
//!
//! - **`auth`** - Authentication and session lifecycle
//!   - Input validation, password hashing, token service
//!   - Cookie session boundary and credential store
//!   - HTTP handlers for register/login/logout/profile
//!
//! - **`completions`** - Completion proxy
//!   - Upstream client bound to a fixed model and output cap
//!   - HTTP handler relaying the raw upstream JSON
//!
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! - **`server`** / **`routes`** - Configuration, state, and router wiring
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatrelay::server::{create_app, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Authentication and session lifecycle
pub mod auth;

/// Completion proxy
pub mod completions;

/// Error taxonomy
pub mod error;

/// JSON body extraction
pub mod extract;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{AppState, Config};
