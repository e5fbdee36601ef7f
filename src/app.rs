//! Application assembly
//!
//! Wires metadata, CORS, the optional feature router, the built-in endpoints
//! and the documentation routes into one [`Router`]. Everything is decided
//! here, once, before the server accepts connections.

use crate::api::routes::{self, ApiDoc};
use crate::config::Settings;
use crate::error::Result;
use crate::features::{self, FeaturesDoc};
use crate::middleware::cors::build_cors_layer;
use crate::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;

/// A router nested into the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedRouter {
    pub prefix: String,
    pub tag: String,
}

/// The assembled service
pub struct Application {
    pub title: String,
    pub description: String,
    /// Version read at startup, used for the OpenAPI document
    pub version: String,
    pub docs_url: Option<String>,
    pub redoc_url: Option<String>,
    middleware: Vec<&'static str>,
    routers: Vec<MountedRouter>,
    router: Router,
}

impl Application {
    /// Names of the attached middleware, outermost last
    pub fn middleware(&self) -> &[&'static str] {
        &self.middleware
    }

    pub fn routers(&self) -> &[MountedRouter] {
        &self.routers
    }

    /// Whether a router is nested under `prefix`
    pub fn has_router(&self, prefix: &str) -> bool {
        self.routers.iter().any(|r| r.prefix == prefix)
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Build the application from settings
pub fn create_app(settings: Settings) -> Result<Application> {
    let versions = settings.app.version_reader();
    let version = versions.read()?;

    let mut middleware = Vec::new();
    let mut routers = Vec::new();

    let cors = build_cors_layer(&settings.cors)?;
    middleware.push("cors");

    let mut openapi = ApiDoc::openapi();
    openapi.info.title = settings.app.title.clone();
    openapi.info.description = Some(settings.app.description.clone());
    openapi.info.version = version.clone();

    let mut router = routes::create_router();

    if let Some(feature_router) = features::mount(&settings.features) {
        router = router.nest(features::PREFIX, feature_router);
        openapi.merge(FeaturesDoc::openapi());
        routers.push(MountedRouter {
            prefix: features::PREFIX.to_string(),
            tag: features::TAG.to_string(),
        });
        info!(prefix = features::PREFIX, "Mounted feature router");
    }

    let docs = routes::docs_router(&settings.app, openapi);

    let state = Arc::new(AppState { versions });

    let router = router
        .merge(docs)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());
    middleware.push("trace");

    info!(
        title = %settings.app.title,
        version = %version,
        routers = routers.len(),
        "Application assembled"
    );

    Ok(Application {
        title: settings.app.title,
        description: settings.app.description,
        version,
        docs_url: settings.app.docs_url,
        redoc_url: settings.app.redoc_url,
        middleware,
        routers,
        router,
    })
}
