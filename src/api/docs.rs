//! Swagger UI served at the docs route itself
//!
//! The bundled index page uses relative asset paths, so it gets a `<base>`
//! tag pointing at `<docs_url>/` and the assets are served below that prefix.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tracing::error;
use utoipa_swagger_ui::Config;

/// Swagger UI files configured to load one OpenAPI document
#[derive(Clone)]
struct SwaggerAssets {
    config: Arc<Config<'static>>,
    base: Arc<str>,
}

impl SwaggerAssets {
    fn respond(&self, path: &str) -> Response {
        match utoipa_swagger_ui::serve(path, self.config.clone()) {
            Ok(Some(file)) => {
                let bytes = if file.content_type.starts_with("text/html") {
                    with_base_href(&String::from_utf8_lossy(&file.bytes), &self.base).into_bytes()
                } else {
                    file.bytes.into_owned()
                };
                ([(header::CONTENT_TYPE, file.content_type)], bytes).into_response()
            }
            Ok(None) => StatusCode::NOT_FOUND.into_response(),
            Err(e) => {
                error!(path = %path, error = %e, "Failed to serve Swagger UI file");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Insert `<base href="{base}/">` right after the opening `<head>` tag
pub fn with_base_href(html: &str, base: &str) -> String {
    let tag = format!("<head>\n    <base href=\"{}/\" />", base.trim_end_matches('/'));
    html.replacen("<head>", &tag, 1)
}

/// Routes for the UI page at `docs_url` and its assets below it
pub fn swagger_router<S>(docs_url: &str, openapi_url: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let base = docs_url.trim_end_matches('/');
    let assets = SwaggerAssets {
        config: Arc::new(Config::new([openapi_url.to_string()])),
        base: base.into(),
    };

    let index = {
        let assets = assets.clone();
        move || async move { assets.respond("") }
    };
    let slash_index = {
        let assets = assets.clone();
        move || async move { assets.respond("") }
    };
    let file = move |Path(rest): Path<String>| async move { assets.respond(&rest) };

    Router::new()
        .route(base, get(index))
        .route(&format!("{}/", base), get(slash_index))
        .route(&format!("{}/*rest", base), get(file))
}
