/**
 * Logout Handler
 *
 * Implements POST /logout. The session is stateless, so logging out is
 * purely a client-side affair: the handler overwrites the `token`
 * cookie with an empty value. No authentication is required.
 */
use axum::response::Json;
use axum_extra::extract::CookieJar;

use crate::auth::cookies::logout_cookie;
use crate::auth::handlers::types::MessageResponse;

/// Logout handler
///
/// Unconditionally clears the session cookie and reports success.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    tracing::info!("Logout request");
    (
        jar.add(logout_cookie()),
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}
