//! Middleware Module
//!
//! HTTP middleware applied ahead of route handlers.
//!
//! - **`auth`** - bearer-token authentication for protected routes

pub mod auth;

pub use auth::{require_auth, CurrentUser};
