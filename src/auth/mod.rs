//! Authentication Module
//!
//! Credential storage, password hashing, bearer-token issuance and
//! verification, and request-scoped identity resolution.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── error.rs    - AuthError taxonomy
//! ├── password.rs - bcrypt hash / verify
//! ├── tokens.rs   - JWT issue / verify (crate-private)
//! ├── store.rs    - CredentialStore trait + Postgres implementation
//! ├── service.rs  - AuthService: login, register, current_principal
//! └── handlers/   - HTTP handlers (register, token, me)
//! ```
//!
//! # Flow
//!
//! 1. **Register**: email + password -> hashed -> stored principal
//! 2. **Login**: credentials verified -> short-lived signed token
//! 3. **Any protected request**: token verified -> subject resolved ->
//!    is_active enforced -> principal attached to the request
//!
//! Token verification is not exported on its own: the only identity entry
//! point is `AuthService::current_principal`, which always performs the
//! resolution and activity steps.

pub mod error;
pub mod handlers;
pub mod password;
pub mod service;
pub mod store;
pub(crate) mod tokens;

pub use error::AuthError;
pub use service::AuthService;
pub use store::{CredentialStore, PgCredentialStore, PrincipalDraft};
