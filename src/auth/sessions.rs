/**
 * Session Tokens
 *
 * This module handles JWT issuance and verification for user sessions.
 *
 * The signing secret is injected once at construction instead of being
 * read from the environment at every call, so tests can run with their
 * own secret and rotating the process secret invalidates every
 * outstanding token (there is no revocation list).
 */
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Session lifetime: 30 days
const SESSION_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
///
/// This is the decoded payload of a session token and is returned
/// verbatim by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Username of the authenticated user
    pub username: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Issues and verifies signed session tokens
///
/// Holds the HS256 keys derived from the process-wide secret. Cheap to
/// clone into application state behind an `Arc`.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Create a token service from the signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issue a signed session token for the given identity
    ///
    /// The token carries `{userId, username, iat, exp}` and expires
    /// after 30 days.
    pub fn issue(
        &self,
        user_id: Uuid,
        username: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let claims = Claims {
            user_id,
            username: username.to_string(),
            iat: now,
            exp: now + SESSION_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify and decode a session token
    ///
    /// Fails if the signature does not match, the token cannot be
    /// parsed, or the token has expired. Callers treat every failure
    /// uniformly as unauthenticated.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret")
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let tokens = service();
        let user_id = Uuid::new_v4();
        let token = tokens.issue(user_id, "alice1").unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.username, "alice1");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let tokens = service();
        let token = tokens.issue(Uuid::new_v4(), "alice1").unwrap();

        // Flip a character in the payload segment.
        let mut tampered = token.clone().into_bytes();
        let mid = token.len() / 2;
        tampered[mid] = if tampered[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(tokens.verify(&tampered).is_err());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert!(service().verify("not.a.token").is_err());
        assert!(service().verify("").is_err());
    }

    #[test]
    fn test_rotating_secret_invalidates_tokens() {
        let token = service().issue(Uuid::new_v4(), "alice1").unwrap();
        let rotated = TokenService::new("another-secret");
        assert!(rotated.verify(&token).is_err());
    }

    #[test]
    fn test_claims_serialize_with_user_id_key() {
        let claims = Claims {
            user_id: Uuid::nil(),
            username: "alice1".to_string(),
            iat: 0,
            exp: 1,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("userId").is_some());
        assert_eq!(json["username"], "alice1");
    }
}
