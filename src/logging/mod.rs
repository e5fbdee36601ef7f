//! Logging setup
//!
//! Two things live here:
//! - [`init`] installs the process-wide `tracing` subscriber used by the server
//! - [`get_logger`] hands out named loggers with their own console handler

mod format;
mod registry;

pub use format::{level_name, NamedFormat};
pub use registry::{Logger, LoggerRegistry};

use crate::config::LoggingConfig;
use std::sync::{Arc, OnceLock};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGERS: OnceLock<LoggerRegistry> = OnceLock::new();

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Calling this more
/// than once leaves the first subscriber in place.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.format == "json" {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

/// Get the process-wide logger registered under `name`
pub fn get_logger(name: &str) -> Arc<Logger> {
    LOGGERS.get_or_init(LoggerRegistry::new).get(name)
}
