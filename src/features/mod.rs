//! Feature endpoints mounted under `/api/v1`
//!
//! This is where feature-specific routes go. The application runs without
//! them when `features.enabled` is false.

use crate::config::FeaturesConfig;
use crate::logging::get_logger;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{OpenApi, ToSchema};

/// Prefix the feature router is nested under
pub const PREFIX: &str = "/api/v1";

/// OpenAPI tag for feature routes
pub const TAG: &str = "features";

pub const RUNNING: &str = "running";

/// Status of the feature subsystem
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct FeatureStatus {
    pub status: String,
}

/// Report that the feature routes are up
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "features",
    responses(
        (status = 200, description = "Feature routes are mounted", body = FeatureStatus),
    )
)]
pub async fn feature_health() -> Json<FeatureStatus> {
    get_logger("features").info("Feature health requested");

    Json(FeatureStatus {
        status: RUNNING.to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(feature_health),
    components(schemas(FeatureStatus)),
    tags((name = "features", description = "Feature endpoints")),
)]
pub struct FeaturesDoc;

/// Feature routes, relative to [`PREFIX`]
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(feature_health))
}

/// Resolve the feature router for this process.
///
/// Returns `None` when features are switched off; that is a normal
/// configuration, not an error.
pub fn mount<S>(config: &FeaturesConfig) -> Option<Router<S>>
where
    S: Clone + Send + Sync + 'static,
{
    if !config.enabled {
        debug!("Feature router disabled, skipping");
        return None;
    }

    Some(router())
}
