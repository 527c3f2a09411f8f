/**
 * Password Hashing
 *
 * One-way password hashing and verification on top of bcrypt. The cost
 * factor is supplied by the caller (it lives in `AuthConfig`), the salt is
 * generated by bcrypt and embedded in the output string.
 *
 * Every code path that stores or checks a password goes through these two
 * functions. Plaintext passwords are never persisted, never logged, and
 * never compared with `==`.
 */

use crate::auth::error::AuthError;

/// Hash a plaintext password with bcrypt.
///
/// The output embeds the salt and cost, so two calls with the same input
/// produce different strings that both verify against the original.
///
/// # Errors
///
/// Returns `AuthError::Hashing` only on an internal bcrypt failure (for
/// example a cost outside bcrypt's supported range). Valid input never
/// fails.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(plain, cost).map_err(|e| AuthError::Hashing(e.to_string()))
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Comparison happens inside bcrypt in constant time. A malformed or
/// truncated hash string verifies as `false` rather than erroring, so a
/// corrupt credential row behaves like a wrong password.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}
