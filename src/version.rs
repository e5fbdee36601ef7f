//! Version lookup from the on-disk VERSION file
//!
//! The file is read on every call so that a changed VERSION is visible
//! without restarting the process.

use crate::error::{AppError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Returned when the VERSION file does not exist
pub const UNKNOWN_VERSION: &str = "unknown";

/// Name of the file holding the version string
pub const VERSION_FILE_NAME: &str = "VERSION";

/// Reads the service version from a file
#[derive(Debug, Clone)]
pub struct VersionReader {
    path: PathBuf,
}

impl VersionReader {
    /// Create a reader for a specific file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the file this reader consults
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and trim the version string.
    ///
    /// A missing file yields [`UNKNOWN_VERSION`]. Every other I/O failure is
    /// returned to the caller.
    pub fn read(&self) -> Result<String> {
        self.interpret(std::fs::read_to_string(&self.path))
    }

    /// [`read`](Self::read) without blocking the async runtime
    pub async fn read_async(&self) -> Result<String> {
        self.interpret(tokio::fs::read_to_string(&self.path).await)
    }

    fn interpret(&self, contents: std::io::Result<String>) -> Result<String> {
        match contents {
            Ok(contents) => Ok(contents.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(UNKNOWN_VERSION.to_string()),
            Err(source) => Err(AppError::VersionRead {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl Default for VersionReader {
    /// The VERSION file at the crate root, two levels above this module
    fn default() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join(VERSION_FILE_NAME))
    }
}

/// Read the version from the default VERSION file
pub fn get_version() -> Result<String> {
    VersionReader::default().read()
}
