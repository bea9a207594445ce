//! HS256 JWT adapter for the token service port.
//!
//! Tokens carry the user id as the `sub` claim plus `iat` and `exp`.
//! Resolution validates the signature and expiry, then parses `sub`
//! back into a [`UserId`]; nothing else is trusted from the token.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, UserId};
use crate::ports::TokenService;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Token service signing with a locally held HMAC secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl_secs: u64,
}

impl JwtTokenService {
    /// Creates a service signing with `secret` and issuing tokens that
    /// live for `token_ttl_secs`.
    pub fn new(secret: &str, token_ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_ttl_secs,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_secs)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: UserId) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.token_ttl_secs as i64,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::IssuanceFailed(format!("Failed to sign token: {}", e)))
    }

    fn resolve(&self, token: &str) -> Result<UserId, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            }
        })?;

        UserId::parse(&data.claims.sub).map_err(|_| {
            tracing::warn!("Valid signature but malformed subject claim");
            AuthError::InvalidToken
        })
    }
}

impl std::fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtTokenService {
        JwtTokenService::new("test-signing-secret", 3600)
    }

    #[test]
    fn issued_tokens_resolve_to_the_same_user() {
        let service = service();
        let user_id = UserId::generate();

        let token = service.issue(user_id).unwrap();
        let resolved = service.resolve(&token).unwrap();

        assert_eq!(resolved, user_id);
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let user_id = UserId::generate();
        let token = JwtTokenService::new("other-secret", 3600)
            .issue(user_id)
            .unwrap();

        let result = service().resolve(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn expired_tokens_are_reported_as_expired() {
        // Encode directly so the expiry lands well past the default
        // 60 second validation leeway.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: UserId::generate().to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-signing-secret"),
        )
        .unwrap();

        let result = service().resolve(&token);
        assert!(matches!(result, Err(AuthError::TokenExpired)));
    }

    #[test]
    fn garbage_tokens_are_invalid() {
        let result = service().resolve("not-a-jwt");
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn valid_signature_with_garbage_subject_is_invalid() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "not-a-user-id".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-signing-secret"),
        )
        .unwrap();

        let result = service().resolve(&token);
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn debug_does_not_leak_the_secret() {
        let rendered = format!("{:?}", service());
        assert!(!rendered.contains("test-signing-secret"));
    }
}
