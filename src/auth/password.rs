/**
 * Password Hashing
 *
 * This module wraps bcrypt hashing and verification. The salt is
 * generated per call and embedded in the digest, so the same plaintext
 * produces a different digest every time while verification still works.
 *
 * # Security
 *
 * - Digests are bcrypt with `DEFAULT_COST`
 * - Verification recomputes with the embedded salt and compares inside
 *   bcrypt; there is no decrypt operation
 * - Hashing runs on the blocking thread pool so a slow hash does not
 *   stall other requests on the async runtime
 */
use bcrypt::DEFAULT_COST;

use crate::error::ApiError;

/// Hash a plaintext password with bcrypt
///
/// Runs on `spawn_blocking` because bcrypt is deliberately expensive.
///
/// # Errors
///
/// Returns an internal error if the blocking task is cancelled or
/// bcrypt itself fails. Neither carries the plaintext.
pub async fn hash_password(password: &str) -> Result<String, ApiError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, DEFAULT_COST))
        .await
        .map_err(|e| ApiError::internal(format!("password hash task failed: {e}")))?
        .map_err(|e| ApiError::internal(format!("failed to hash password: {e}")))
}

/// Verify a plaintext password against a stored bcrypt digest
///
/// Returns `Ok(false)` on a mismatch; `Err` only if the digest is not a
/// valid bcrypt string or the blocking task fails.
pub async fn verify_password(password: &str, digest: &str) -> Result<bool, ApiError> {
    let password = password.to_owned();
    let digest = digest.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &digest))
        .await
        .map_err(|e| ApiError::internal(format!("password verify task failed: {e}")))?
        .map_err(|e| ApiError::internal(format!("failed to verify password: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hash_then_verify_roundtrip() {
        let digest = hash_password("Passw0rd").await.unwrap();
        assert!(verify_password("Passw0rd", &digest).await.unwrap());
        assert!(!verify_password("wrong-password", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn test_digest_is_salted() {
        // Low cost keeps the test fast; the salt behavior is identical.
        let a = bcrypt::hash("Passw0rd", 4).unwrap();
        let b = bcrypt::hash("Passw0rd", 4).unwrap();
        assert_ne!(a, b);
        assert!(verify_password("Passw0rd", &a).await.unwrap());
        assert!(verify_password("Passw0rd", &b).await.unwrap());
    }

    #[tokio::test]
    async fn test_digest_never_contains_plaintext() {
        let digest = bcrypt::hash("Passw0rd", 4).unwrap();
        assert!(!digest.contains("Passw0rd"));
    }

    #[tokio::test]
    async fn test_malformed_digest_is_an_error() {
        assert!(verify_password("Passw0rd", "not-a-bcrypt-digest")
            .await
            .is_err());
    }
}
