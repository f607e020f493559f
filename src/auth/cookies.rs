/**
 * Session Cookie Boundary
 *
 * This module maps session tokens to and from the `token` cookie. It is
 * the only place that knows the cookie's name and attributes, so the
 * handlers stay in terms of tokens.
 *
 * # Attributes
 *
 * Session cookies are HttpOnly (no script access), Path=/, Secure, and
 * SameSite=None so a cross-origin frontend can send them with
 * credentialed requests. Logout reuses the same attributes with an
 * empty value.
 */
use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Build the session cookie carrying a freshly issued token
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::None)
        .secure(true)
        .build()
}

/// Build the cookie that clears the session
///
/// An empty value with the same attributes overwrites whatever token the
/// client holds.
pub fn logout_cookie() -> Cookie<'static> {
    session_cookie(String::new())
}
