//! API response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to the Feature Template API";
pub const HEALTHY: &str = "healthy";

/// Response for the root endpoint
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RootResponse {
    /// Always the welcome message
    pub message: String,
    /// Contents of the VERSION file, or "unknown"
    pub version: String,
}

impl RootResponse {
    pub fn new(version: String) -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            version,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: String) -> Self {
        Self {
            status: HEALTHY.to_string(),
            version,
        }
    }
}

/// Body returned when a request fails
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
