/**
 * Server Initialization
 *
 * This module handles the setup of the Axum application: database
 * connection, migrations, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the PostgreSQL pool (fail-fast: a backend without its
 *    credential store does not start)
 * 2. Run pending migrations
 * 3. Build the application state from the loaded configuration
 * 4. Create the router with CORS and request tracing
 */
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::auth::sessions::TokenService;
use crate::auth::users::PgUserStore;
use crate::completions::client::CompletionClient;
use crate::routes::router::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database is unreachable or migrations cannot be applied.
pub async fn create_app(config: &Config) -> Result<Router, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    let state = AppState::new(
        Arc::new(PgUserStore::new(pool)),
        TokenService::new(&config.jwt_secret),
        CompletionClient::new(config.openai_api_key.clone()),
    );

    Ok(create_router(state, config.site_url.as_deref()))
}
