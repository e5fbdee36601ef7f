//! HTTP request handlers

use crate::api::models::{ErrorResponse, HealthResponse, RootResponse};
use crate::error::AppError;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Welcome message with the current version
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Welcome message", body = RootResponse),
        (status = 500, description = "VERSION file unreadable", body = ErrorResponse),
    )
)]
pub async fn root(State(state): State<Arc<AppState>>) -> Result<Json<RootResponse>, AppError> {
    let version = state.versions.read_async().await?;
    Ok(Json(RootResponse::new(version)))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 500, description = "VERSION file unreadable", body = ErrorResponse),
    )
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, AppError> {
    let version = state.versions.read_async().await?;
    Ok(Json(HealthResponse::healthy(version)))
}
