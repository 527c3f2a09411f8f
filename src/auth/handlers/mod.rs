//! Authentication Handlers
//!
//! HTTP handlers for the authentication endpoints.
//!
//! - **`register`** - POST /api/v1/auth/register - account creation
//! - **`login`** - POST /api/v1/auth/token - credentials to bearer token
//! - **`me`** - GET /api/v1/auth/me - the account behind the token

pub mod login;
pub mod me;
pub mod register;
pub mod types;

pub use login::login;
pub use me::me;
pub use register::register;
pub use types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
