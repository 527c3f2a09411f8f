/**
 * Bearer Token Issue and Verify
 *
 * Signed, time-bound JWT access tokens. A token binds a subject (the
 * principal's email) to an expiry; the signature covers the whole payload,
 * so any mutation invalidates it.
 *
 * These functions are crate-private on purpose. Route code can only reach
 * a verified identity through `AuthService::current_principal`, which also
 * runs the store lookup and the is_active check. There is no way to accept
 * a token without resolving the account behind it.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;
use crate::server::config::AuthConfig;

/// JWT claims carried by every access token
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    /// Subject: the principal's login key, exactly as stored
    pub sub: String,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiry (Unix timestamp). Mandatory; a token without it never verifies.
    pub exp: i64,
}

/// Issue a signed token binding `subject` to `now + ttl`.
///
/// Reads nothing but the clock and the configured secret. A negative `ttl`
/// produces an already-expired token, which the tests use to exercise the
/// expiry path.
pub(crate) fn issue(
    config: &AuthConfig,
    subject: &str,
    ttl: Duration,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: subject.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(
        &Header::new(config.algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::TokenCreation(e.to_string()))
}

/// Verify a token string and return its subject claim.
///
/// Failure modes, in the order the checks run:
///
/// 1. structural decode failure or missing `exp` -> `MalformedToken`
/// 2. signature mismatch (or signing-scheme mismatch) -> `InvalidSignature`
/// 3. `exp <= now` -> `TokenExpired`
///
/// Expiry is checked with zero leeway: a token one second past its expiry
/// is rejected.
pub(crate) fn verify(config: &AuthConfig, token: &str) -> Result<String, AuthError> {
    let mut validation = Validation::new(config.algorithm);
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        _ => AuthError::MalformedToken,
    })?;

    Ok(data.claims.sub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn test_config() -> AuthConfig {
        AuthConfig::new("unit-test-signing-secret", Algorithm::HS256, 30, 4).unwrap()
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let config = test_config();
        let token = issue(&config, "alice@example.com", Duration::minutes(5)).unwrap();
        let subject = verify(&config, &token).unwrap();
        assert_eq!(subject, "alice@example.com");
    }

    #[test]
    fn test_subject_returned_exactly_as_issued() {
        let config = test_config();
        let token = issue(&config, "Alice@Example.COM", Duration::minutes(5)).unwrap();
        assert_eq!(verify(&config, &token).unwrap(), "Alice@Example.COM");
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let token = issue(&config, "alice@example.com", Duration::seconds(-1)).unwrap();
        assert!(matches!(
            verify(&config, &token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_tampered_payload_is_signature_mismatch() {
        let config = test_config();
        let token = issue(&config, "alice@example.com", Duration::minutes(5)).unwrap();

        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert!(matches!(
            verify(&config, &tampered),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_secret_is_signature_mismatch() {
        let config = test_config();
        let other =
            AuthConfig::new("a-different-signing-secret", Algorithm::HS256, 30, 4).unwrap();
        let token = issue(&other, "alice@example.com", Duration::minutes(5)).unwrap();
        assert!(matches!(
            verify(&config, &token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let config = test_config();
        for garbage in ["", "not-a-token", "a.b", "a.b.c.d"] {
            assert!(
                matches!(verify(&config, garbage), Err(AuthError::MalformedToken)),
                "expected MalformedToken for {garbage:?}"
            );
        }
    }

    #[test]
    fn test_missing_expiry_is_malformed() {
        #[derive(Serialize)]
        struct NoExpiry {
            sub: String,
        }

        let config = test_config();
        let token = encode(
            &Header::new(config.algorithm),
            &NoExpiry {
                sub: "alice@example.com".to_string(),
            },
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify(&config, &token),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_algorithm_mismatch_is_signature_mismatch() {
        let config = test_config();
        let hs384 =
            AuthConfig::new("unit-test-signing-secret", Algorithm::HS384, 30, 4).unwrap();
        let token = issue(&hs384, "alice@example.com", Duration::minutes(5)).unwrap();
        assert!(matches!(
            verify(&config, &token),
            Err(AuthError::InvalidSignature)
        ));
    }
}
