//! Error Module
//!
//! This module defines the error taxonomy used by all HTTP handlers.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Error Taxonomy
//!
//! - `Validation` - Malformed client input (400)
//! - `Conflict` - Duplicate identity (400)
//! - `NotFound` - Unknown user (404)
//! - `Unauthorized` - Missing or invalid session token (401)
//! - `Configuration` - Missing runtime configuration (500)
//! - `Internal` - Store, hashing, or signing failure (500)
//!
//! Validation, conflict, and not-found errors carry a specific
//! human-readable message. Internal failures keep their detail
//! server-side: the detail is logged, and the client only ever sees a
//! generic message.
//!
//! # HTTP Response Conversion
//!
//! All errors implement `IntoResponse` from Axum, allowing them to be
//! returned directly from handlers. The error is converted to a JSON
//! body of the form `{"error": "<message>"}` with the matching status.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
