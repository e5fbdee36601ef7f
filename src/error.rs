//! Application error type

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;
use tracing::error;

/// Unified error type for the service
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading or validation failed
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The VERSION file exists but could not be read
    #[error("failed to read version file {}: {source}", path.display())]
    VersionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CORS setting could not be turned into a header value
    #[error("invalid CORS setting: {0}")]
    InvalidCors(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
