//! HTTP route definitions

use crate::api::{docs, handlers};
use crate::api::models::*;
use crate::config::AppConfig;
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

/// OpenAPI documentation for the built-in endpoints.
///
/// Title, description and version are filled in at startup.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root,
        handlers::health_check,
    ),
    components(schemas(
        RootResponse,
        HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "Root", description = "Service landing endpoint"),
        (name = "Health", description = "Health and monitoring endpoints"),
    )
)]
pub struct ApiDoc;

/// Routes served directly by the application
pub fn create_router() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
}

/// Documentation routes: Swagger UI, ReDoc and the raw OpenAPI document
pub fn docs_router<S>(config: &AppConfig, openapi: utoipa::openapi::OpenApi) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut router = Router::new().route(
        &config.openapi_url,
        get({
            let openapi = openapi.clone();
            move || async move { Json(openapi) }
        }),
    );

    if let Some(docs_url) = &config.docs_url {
        router = router.merge(docs::swagger_router(docs_url, &config.openapi_url));
    }

    if let Some(redoc_url) = &config.redoc_url {
        router = router.merge(Redoc::with_url(redoc_url.clone(), openapi));
    }

    router
}
