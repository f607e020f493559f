//! Authentication Module
//!
//! This module contains the whole authentication and session lifecycle:
//! registration validation, credential hashing, token issuance and
//! verification, the cookie session boundary, and the credential store.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports
//! ├── validation.rs - Registration input rules
//! ├── password.rs   - bcrypt hash/verify wrappers
//! ├── sessions.rs   - JWT claims and TokenService
//! ├── cookies.rs    - Session cookie construction
//! ├── users.rs      - User model and credential store
//! └── handlers/     - HTTP handlers (register, login, logout, profile)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate input → hash password → create user →
//!    issue token → set cookie
//! 2. **Login**: look up user → verify password → issue token → set cookie
//! 3. **Profile**: read cookie → verify token → return claims
//! 4. **Logout**: clear cookie
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Tokens are signed with a process-wide secret injected at startup
//! - Invalid tokens and missing tokens both return 401

/// Registration input validation rules
pub mod validation;

/// Password hashing and verification
pub mod password;

/// JWT claims and token service
pub mod sessions;

/// Session cookie construction
pub mod cookies;

/// User model and credential store
pub mod users;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types
pub use sessions::{Claims, TokenService};
pub use users::{MemoryUserStore, PgUserStore, User, UserStore};
