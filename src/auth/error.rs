/**
 * Authentication Error Types
 *
 * This module defines the error taxonomy for the authentication core.
 * Variants are deliberately fine-grained internally (logging, tests) while
 * the HTTP conversion layer collapses them so that clients cannot tell
 * token failures, unknown subjects, and disabled accounts apart.
 */

use thiserror::Error;

/// Errors produced by the authentication core
///
/// # Variants
///
/// Login failures, token failures, and resolution failures each carry a
/// distinct variant. The HTTP layer maps all of the token/resolution
/// variants onto the same 401 response body.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login rejected. Covers both "no such account" and "wrong password"
    /// so that the response cannot be used to enumerate accounts.
    #[error("incorrect username or password")]
    InvalidCredentials,

    /// Token failed structural decoding, or a required claim is missing.
    #[error("malformed bearer token")]
    MalformedToken,

    /// Token decoded but its signature does not match the configured secret.
    #[error("bearer token signature mismatch")]
    InvalidSignature,

    /// Token is past its expiry.
    #[error("bearer token expired")]
    TokenExpired,

    /// Token verified but its subject matches no stored principal.
    #[error("token subject matches no account")]
    UnknownSubject,

    /// The principal exists but has been deactivated.
    #[error("account is inactive")]
    InactiveAccount,

    /// Registration collided with an existing login key.
    #[error("email {0} already registered")]
    DuplicateKey(String),

    /// The password hashing library failed internally.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Token serialization or signing failed internally.
    #[error("token creation failed: {0}")]
    TokenCreation(String),

    /// The credential store failed (connection loss, query error).
    #[error("credential store failure: {0}")]
    Store(String),
}

impl AuthError {
    /// Whether this failure belongs to the bearer-challenge class.
    ///
    /// These are the variants the HTTP layer answers with
    /// `401 Unauthorized` and a `WWW-Authenticate: Bearer` header, all
    /// with an identical response body.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::MalformedToken
                | Self::InvalidSignature
                | Self::TokenExpired
                | Self::UnknownSubject
                | Self::InactiveAccount
        )
    }
}
