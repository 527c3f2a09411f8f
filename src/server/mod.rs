//! Server Module
//!
//! Process-level concerns: configuration loading, shared state, and
//! application assembly.
//!
//! - **`config`** - env-driven immutable configuration
//! - **`state`** - `AppState` and `FromRef` extraction
//! - **`init`** - database connection, migrations, router assembly

pub mod config;
pub mod init;
pub mod state;

pub use config::{AuthConfig, ConfigError, ServerConfig};
pub use state::AppState;
