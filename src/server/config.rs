/**
 * Server Configuration
 *
 * This module loads and validates process configuration from the
 * environment (with `.env` support via dotenv in `main`).
 *
 * # Fail-fast vs fail-late
 *
 * `DATABASE_URL` and `JWT_SECRET` are required at startup: a backend
 * that cannot persist users or sign sessions is not worth starting.
 * `OPENAI_API_KEY` and `SITE_URL` are optional: a missing API key only
 * fails `/completions` requests, and a missing site URL just skips the
 * CORS layer.
 */
use thiserror::Error;

/// Default listen port
const DEFAULT_PORT: u16 = 4050;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// PORT was set but is not a valid port number
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string (required)
    pub database_url: String,
    /// Session token signing secret (required)
    pub jwt_secret: String,
    /// Bearer credential for the completion service (optional)
    pub openai_api_key: Option<String>,
    /// Allowed cross-origin caller (optional)
    pub site_url: Option<String>,
    /// Listen port
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails if `DATABASE_URL` or `JWT_SECRET` is missing, or if
    /// `PORT` is set to something unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let openai_api_key = std::env::var("OPENAI_API_KEY").ok().filter(|v| !v.is_empty());
        if openai_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY not set; /completions requests will fail");
        }

        let site_url = std::env::var("SITE_URL").ok().filter(|v| !v.is_empty());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            openai_api_key,
            site_url,
            port,
        })
    }
}
