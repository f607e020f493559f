/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate username, email, password, and confirmation (in order,
 *    stopping at the first failure)
 * 2. Hash the password with bcrypt
 * 3. Create the user in the credential store (uniqueness is enforced
 *    there; duplicates come back as conflicts)
 * 4. Issue a session token and set it as the `token` cookie
 *
 * # Security
 *
 * - The plaintext password is never stored or logged
 * - Store and signing failures are logged server-side and surfaced as a
 *   generic 500
 */
use axum::{extract::State, http::StatusCode};
use axum_extra::extract::CookieJar;

use crate::auth::cookies::session_cookie;
use crate::extract::Json;
use crate::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::auth::password::hash_password;
use crate::auth::validation::validate_registration;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - validation failure or duplicate username/email
/// * `500 Internal Server Error` - hashing, store I/O, or signing failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice1",
///   "email": "a@b.com",
///   "password": "Passw0rd",
///   "confirmPassword": "Passw0rd"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), ApiError> {
    tracing::info!("Registration request for username: {}", request.username);

    validate_registration(
        &request.username,
        &request.email,
        &request.password,
        &request.confirm_password,
    )
    .inspect_err(|e| tracing::warn!("Registration rejected: {}", e.message()))?;

    let password_hash = hash_password(&request.password).await?;

    let user = state
        .users
        .create_user(&request.username, &request.email, &password_hash)
        .await
        .map_err(|e| {
            tracing::warn!("Failed to create user {}: {e}", request.username);
            ApiError::from(e)
        })?;

    let token = state.tokens.issue(user.id, &user.username).map_err(|e| {
        ApiError::internal(format!("failed to sign session token: {e}"))
    })?;

    tracing::info!("User registered: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        jar.add(session_cookie(token)),
        Json(AuthResponse {
            id: user.id.to_string(),
            message: "Registration successful! Please log in.".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::state::AppState;

    fn app_state() -> AppState {
        AppState::for_tests()
    }

    fn request(username: &str, email: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success_sets_cookie() {
        let state = app_state();
        let result = register(
            State(state.clone()),
            CookieJar::new(),
            Json(request("alice1", "a@b.com", "Passw0rd", "Passw0rd")),
        )
        .await
        .unwrap();

        let (status, jar, body) = result;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.message, "Registration successful! Please log in.");

        let cookie = jar.get("token").expect("token cookie set");
        let claims = state.tokens.verify(cookie.value()).unwrap();
        assert_eq!(claims.username, "alice1");
    }

    #[tokio::test]
    async fn test_register_weak_password_creates_nothing() {
        let state = app_state();
        let err = register(
            State(state.clone()),
            CookieJar::new(),
            Json(request("alice1", "a@b.com", "short", "short")),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message().starts_with("Password"));
        assert!(state
            .users
            .find_by_username("alice1")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_username_conflicts() {
        let state = app_state();
        register(
            State(state.clone()),
            CookieJar::new(),
            Json(request("alice1", "a@b.com", "Passw0rd", "Passw0rd")),
        )
        .await
        .unwrap();

        let err = register(
            State(state),
            CookieJar::new(),
            Json(request("alice1", "other@b.com", "Passw0rd", "Passw0rd")),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Username already taken");
    }

    #[tokio::test]
    async fn test_register_mismatched_confirmation() {
        let err = register(
            State(app_state()),
            CookieJar::new(),
            Json(request("alice1", "a@b.com", "Passw0rd", "Passw0rd2")),
        )
        .await
        .unwrap_err();

        assert_eq!(err.message(), "Passwords do not match");
    }
}
