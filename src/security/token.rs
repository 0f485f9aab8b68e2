use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email.
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies signed, time-bound identity tokens (HS256).
///
/// The signing secret is injected at construction and shared process-wide;
/// tokens are verifiable without a store lookup.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::default();
        // Expiry is exact; the default 60 s leeway would let just-expired
        // tokens through.
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn issue(&self, subject: &str, role: &str) -> Result<String, DomainError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// `None` for anything that is not a currently valid token issued with
    /// this secret: malformed input, a bad signature, or an expired `exp`.
    /// Never errors past this boundary.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-signing-secret";

    #[test]
    fn issued_token_verifies_with_subject_and_role() {
        let svc = TokenService::new(SECRET, Duration::hours(24));
        let token = svc.issue("a@x.com", "USER").expect("issue failed");

        let claims = svc.verify(&token).expect("token should verify");
        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.role, "USER");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Issue with a negative ttl so the expiry timestamp is in the past.
        let svc = TokenService::new(SECRET, Duration::seconds(-30));
        let token = svc.issue("a@x.com", "USER").expect("issue failed");
        assert!(svc.verify(&token).is_none());
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let issuer = TokenService::new(b"other-secret", Duration::hours(1));
        let verifier = TokenService::new(SECRET, Duration::hours(1));
        let token = issuer.issue("a@x.com", "USER").expect("issue failed");
        assert!(verifier.verify(&token).is_none());
    }

    #[test]
    fn malformed_token_is_rejected() {
        let svc = TokenService::new(SECRET, Duration::hours(1));
        assert!(svc.verify("not-a-jwt").is_none());
        assert!(svc.verify("").is_none());
    }
}
