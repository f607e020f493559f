/**
 * User Model and Credential Store
 *
 * This module defines the sole persisted entity and the store it lives
 * in. The store is a trait so the handlers can be exercised against an
 * in-memory substitute while production uses PostgreSQL.
 *
 * # Invariants
 *
 * - `username` and `email` are each unique across all records; the
 *   backing store enforces this and duplicates surface as
 *   `StoreError::Duplicate`
 * - `password_hash` is never empty and never the plaintext password
 * - Records are created once during registration and never updated or
 *   deleted afterwards (timestamps are store-managed)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// User struct representing a user record in the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned at creation
    pub id: Uuid,
    /// Username (unique, 3-20 chars, alphanumeric)
    pub username: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected a duplicate username or email
    ///
    /// The message is client-safe and names which field collided.
    #[error("{0}")]
    Duplicate(String),

    /// Any other store failure (connection, query, decode)
    #[error(transparent)]
    Backend(#[from] sqlx::Error),
}

/// Credential store interface
///
/// Persists user records with uniqueness enforcement on username and
/// email, and supports exact-match lookup by username. No update or
/// delete operations are exposed.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user record
    ///
    /// Fails with `StoreError::Duplicate` if the username or email is
    /// already taken.
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError>;

    /// Look up a user by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a unique-constraint violation to a client-safe conflict message
///
/// Constraint names come from the `users` table migration.
fn duplicate_message(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("users_username_key") => "Username already taken",
        Some("users_email_key") => "Email already registered",
        _ => "Username or email already registered",
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(
                StoreError::Duplicate(duplicate_message(db.constraint()).to_string()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// In-memory credential store
///
/// Enforces the same uniqueness rules as the PostgreSQL store. Used by
/// the test suite so the handlers can run without a database.
#[derive(Default)]
pub struct MemoryUserStore {
    users: std::sync::Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError> {
        let mut users = self.users.lock().expect("user store lock");

        if users.iter().any(|u| u.username == username) {
            return Err(StoreError::Duplicate("Username already taken".to_string()));
        }
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::Duplicate(
                "Email already registered".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().expect("user store lock");
        Ok(users.iter().find(|u| u.username == username).cloned())
    }
}
