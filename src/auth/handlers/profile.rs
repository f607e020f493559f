/**
 * Profile Handler
 *
 * Implements GET /profile, which returns the decoded claims of the
 * current session.
 *
 * # Authentication
 *
 * The session token is read from the `token` cookie. A missing cookie
 * and a failed verification are both 401, with distinct messages so the
 * client can tell "not logged in" from "session no longer valid". The
 * verification failure reason is logged but not returned.
 */
use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::auth::cookies::TOKEN_COOKIE;
use crate::auth::sessions::Claims;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Profile handler
///
/// # Errors
///
/// * `401 Unauthorized` - no `token` cookie, or verification failed
pub async fn profile(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Claims>, ApiError> {
    let cookie = jar.get(TOKEN_COOKIE).ok_or_else(|| {
        tracing::warn!("Profile request without session cookie");
        ApiError::unauthorized("No token")
    })?;

    let claims = state.tokens.verify(cookie.value()).map_err(|e| {
        tracing::warn!("Session token verification failed: {e}");
        ApiError::unauthorized("Invalid token")
    })?;

    Ok(Json(claims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_extra::extract::cookie::Cookie;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_profile_returns_claims() {
        let state = AppState::for_tests();
        let user_id = Uuid::new_v4();
        let token = state.tokens.issue(user_id, "alice1").unwrap();
        let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, token));

        let Json(claims) = profile(State(state), jar).await.unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.username, "alice1");
    }

    #[tokio::test]
    async fn test_profile_without_cookie() {
        let err = profile(State(AppState::for_tests()), CookieJar::new())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "No token");
    }

    #[tokio::test]
    async fn test_profile_with_tampered_token() {
        let state = AppState::for_tests();
        let token = state.tokens.issue(Uuid::new_v4(), "alice1").unwrap();
        let tampered = format!("{token}x");
        let jar = CookieJar::new().add(Cookie::new(TOKEN_COOKIE, tampered));

        let err = profile(State(state), jar).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Invalid token");
    }
}
