//! Taskboard - Main Library
//!
//! Taskboard is a task-management HTTP API with password-based login and
//! stateless bearer-token authorization.
//!
//! # Module Structure
//!
//! - **`auth`** - the security core: password hashing, token issue and
//!   verify, credential store seam, login and identity resolution, and
//!   the authentication HTTP handlers
//! - **`users`** / **`tasks`** - entity models, sqlx store operations,
//!   and the CRUD HTTP handlers
//! - **`middleware`** - bearer-token middleware and the `CurrentUser`
//!   extractor
//! - **`error`** - the `ApiError` type handlers return and its HTTP
//!   conversion
//! - **`routes`** - router assembly and pagination
//! - **`server`** - configuration, shared state, and app initialization
//!
//! # Authentication Flow
//!
//! 1. **Register**: `POST /api/v1/auth/register` with email and password
//! 2. **Login**: `POST /api/v1/auth/token` returns a short-lived signed
//!    bearer token
//! 3. **Authorized requests**: `Authorization: Bearer <token>`; the
//!    middleware verifies the token, resolves the account, and enforces
//!    that it is still active before any handler runs

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod tasks;
pub mod users;
