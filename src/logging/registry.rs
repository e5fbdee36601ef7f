//! Process-wide registry of named loggers

use dashmap::DashMap;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use super::format::NamedFormat;

type WriterFactory = dyn Fn() -> BoxMakeWriter + Send + Sync;

/// A named logger with its own output handler.
///
/// Events go through the logger's handler only, independent of whatever
/// global subscriber the process has installed.
pub struct Logger {
    name: String,
    handlers: Vec<Dispatch>,
}

impl Logger {
    fn new(name: &str, make_writer: BoxMakeWriter) -> Self {
        let mut logger = Self {
            name: name.to_string(),
            handlers: Vec::new(),
        };
        logger.attach_console_handler(make_writer);
        logger
    }

    /// Attaches the console handler unless one is already present
    fn attach_console_handler(&mut self, make_writer: BoxMakeWriter) {
        if !self.handlers.is_empty() {
            return;
        }

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_ansi(false)
            .with_writer(make_writer)
            .event_format(NamedFormat::new(&self.name))
            .finish();
        self.handlers.push(Dispatch::new(subscriber));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of output handlers attached to this logger
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn debug(&self, message: impl Display) {
        self.emit(|| tracing::debug!("{}", message));
    }

    pub fn info(&self, message: impl Display) {
        self.emit(|| tracing::info!("{}", message));
    }

    pub fn warn(&self, message: impl Display) {
        self.emit(|| tracing::warn!("{}", message));
    }

    pub fn error(&self, message: impl Display) {
        self.emit(|| tracing::error!("{}", message));
    }

    fn emit(&self, log: impl Fn()) {
        for handler in &self.handlers {
            tracing::dispatcher::with_default(handler, &log);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Registry handing out one [`Logger`] per name
pub struct LoggerRegistry {
    loggers: DashMap<String, Arc<Logger>>,
    make_writer: Arc<WriterFactory>,
}

impl LoggerRegistry {
    /// Registry whose loggers write to stderr
    pub fn new() -> Self {
        Self::with_writer(|| BoxMakeWriter::new(std::io::stderr))
    }

    /// Registry whose loggers write wherever `make_writer` points them
    pub fn with_writer<F>(make_writer: F) -> Self
    where
        F: Fn() -> BoxMakeWriter + Send + Sync + 'static,
    {
        Self {
            loggers: DashMap::new(),
            make_writer: Arc::new(make_writer),
        }
    }

    /// Get the logger for `name`, creating and configuring it on first use.
    ///
    /// The entry lock makes concurrent first calls agree on a single logger.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.get(name) {
            return logger.clone();
        }

        self.loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::new(name, (self.make_writer)())))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
