//! Token service: issues and verifies signed bearer tokens.
//!
//! Issuance is a deliberately low-trust step: any caller may request a token
//! for any identifier without a directory check. The token only proves the
//! claim was asserted; role checks re-derive state from the directory.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

use crate::constants::ERR_INVALID_TOKEN;
use crate::errors::ApiError;
use crate::models::Claims;

/// Fixed token lifetime of one hour.
pub const TOKEN_TTL_SECS: usize = 3600;

/// Signs and verifies bearer tokens with a server-held secret.
///
/// Cheap to clone; each middleware instance holds its own copy of the keys.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a token for the given identifier, expiring in one hour.
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            email: email.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        debug!("Issuing token for {}", email);
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry, returning the decoded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::Unauthorized(ERR_INVALID_TOKEN.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let service = TokenService::new("test-secret");
        let token = service.issue("a@x.com").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token_fails_unauthorized() {
        let service = TokenService::new("test-secret");

        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            email: "a@x.com".to_string(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        match service.verify(&token) {
            Err(ApiError::Unauthorized(_)) => {}
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_token_signed_with_other_key_fails() {
        let issuer = TokenService::new("secret-a");
        let verifier = TokenService::new("secret-b");

        let token = issuer.issue("a@x.com").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_fails() {
        let service = TokenService::new("test-secret");
        assert!(service.verify("not-a-jwt").is_err());
    }
}
