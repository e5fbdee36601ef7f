//! Feature Template API
//!
//! A template HTTP service: version and health endpoints, permissive CORS,
//! interactive API docs, and an optional feature router under `/api/v1`.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod middleware;
pub mod version;

pub use app::{create_app, Application};
pub use error::{AppError, Result};
pub use logging::get_logger;
pub use version::get_version;

use version::VersionReader;

/// Application state shared across all handlers
pub struct AppState {
    /// Consulted on every request; the version is never cached
    pub versions: VersionReader,
}
