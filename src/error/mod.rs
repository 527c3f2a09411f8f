//! API Error Module
//!
//! Error types returned by HTTP handlers and their conversion into
//! responses.
//!
//! - **`types`** - the `ApiError` enum and constructors
//! - **`conversion`** - `IntoResponse`, status mapping, response bodies
//!
//! Every handler returns `Result<_, ApiError>`; the conversion layer
//! produces a JSON `{"detail": ...}` body, attaches the bearer challenge
//! header to 401s, and keeps infrastructure detail out of client-visible
//! responses.

pub mod conversion;
pub mod types;

pub use types::ApiError;
