//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the authentication
//! endpoints. Handlers are organized into focused submodules.
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - User authentication
//! - **`logout`** - POST /logout - Clear the session cookie
//! - **`profile`** - GET /profile - Decode the current session
//!
//! # Authentication Flow
//!
//! 1. **Register**: input validated → password hashed → user created →
//!    token issued and set as the `token` cookie
//! 2. **Login**: credentials verified → token issued and set as cookie
//! 3. **Profile**: cookie verified → claims returned
//! 4. **Logout**: cookie cleared unconditionally
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Sessions are stateless: validity is signature verification only
//! - Internal failure detail is logged, never returned to the client

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Profile handler
pub mod profile;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use profile::profile;
pub use register::register;
