/**
 * Authentication Handler Types
 *
 * Request and response bodies shared across the register, login, and
 * logout handlers. The profile endpoint returns `Claims` directly.
 */
use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Chosen username (3-20 chars, alphanumeric)
    pub username: String,
    /// Email address
    pub email: String,
    /// Password (hashed before storage)
    pub password: String,
    /// Password confirmation, must equal `password`
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Username
    pub username: String,
    /// Password (verified against the stored hash)
    pub password: String,
}

/// Response for successful registration and login
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Id of the user record
    pub id: String,
    /// Human-readable outcome message
    pub message: String,
}

/// Plain message response (logout)
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
