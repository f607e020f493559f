/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Require both fields to be non-empty
 * 2. Look up the user by username
 * 3. Verify the password with bcrypt
 * 4. Issue a session token and set it as the `token` cookie
 *
 * # Security
 *
 * - Password comparison happens inside bcrypt
 * - Passwords are never logged or returned
 * - Signing failures are logged and surfaced as a generic 500
 */
use axum::extract::State;
use axum_extra::extract::CookieJar;

use crate::auth::cookies::session_cookie;
use crate::extract::Json;
use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::auth::password::verify_password;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - username or password missing
/// * `404 Not Found` - no user with that username
/// * `401 Unauthorized` - password does not match
/// * `500 Internal Server Error` - store I/O or token signing failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        tracing::warn!("Login request with missing credentials");
        return Err(ApiError::validation("Username and password are required"));
    }

    tracing::info!("Login request for: {}", request.username);

    let user = state
        .users
        .find_by_username(&request.username)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            ApiError::not_found("User not found")
        })?;

    let valid = verify_password(&request.password, &user.password_hash).await?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(ApiError::unauthorized("Invalid password"));
    }

    let token = state.tokens.issue(user.id, &user.username).map_err(|e| {
        ApiError::internal(format!("failed to sign session token: {e}"))
    })?;

    tracing::info!("User logged in: {}", user.username);

    Ok((
        jar.add(session_cookie(token)),
        Json(AuthResponse {
            id: user.id.to_string(),
            message: "Login successful!".to_string(),
        }),
    ))
}
