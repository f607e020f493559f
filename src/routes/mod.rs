//! Routes Module
//!
//! HTTP route configuration and router assembly.

/// Router assembly
pub mod router;

// Re-export commonly used functions
pub use router::create_router;
