/**
 * Router Configuration
 *
 * This module assembles the application router.
 *
 * # Routes
 *
 * - `POST /completions` - completion proxy
 * - `POST /register` - user registration
 * - `POST /login` - user login
 * - `POST /logout` - clear the session cookie
 * - `GET /profile` - decode the current session
 *
 * Unknown routes fall through to a 404 handler.
 *
 * # Middleware
 *
 * - `TraceLayer` for request logging
 * - `CorsLayer` allowing the single configured origin with credentials,
 *   so a cross-origin frontend can send the session cookie
 */
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::handlers::{login, logout, profile, register};
use crate::completions::handler::complete;
use crate::server::state::AppState;

/// Create the application router
///
/// # Arguments
///
/// * `state` - application state shared by all handlers
/// * `allowed_origin` - cross-origin caller to allow, if any; an
///   unparseable value is logged and skipped rather than rejected
pub fn create_router(state: AppState, allowed_origin: Option<&str>) -> Router {
    let mut router = Router::new()
        .route("/completions", post(complete))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/profile", get(profile))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = allowed_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                router = router.layer(
                    CorsLayer::new()
                        .allow_origin(origin)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers([CONTENT_TYPE])
                        .allow_credentials(true),
                );
            }
            Err(_) => {
                tracing::warn!("SITE_URL is not a valid origin; CORS layer disabled");
            }
        }
    }

    router
}
