//! Server Module
//!
//! This module contains the wiring for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration loading
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: read and validate environment variables
//! 2. **Database Connection**: connect the pool and run migrations
//! 3. **State Creation**: build the credential store, token service, and
//!    completion client
//! 4. **Router Creation**: configure routes, CORS, and tracing

/// Environment configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::Config;
pub use init::create_app;
pub use state::AppState;
