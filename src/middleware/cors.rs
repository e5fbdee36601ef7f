//! Cross-origin policy layer

use crate::config::CorsConfig;
use crate::error::{AppError, Result};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tracing::warn;

const WILDCARD: &str = "*";

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == WILDCARD)
}

/// Whether the policy lets any origin through
pub fn allows_any_origin(config: &CorsConfig) -> bool {
    is_wildcard(&config.allow_origins)
}

/// Build the CORS layer for the given policy.
///
/// Browsers reject a literal `*` on credentialed responses, so wildcards
/// combined with `allow_credentials` echo the request's own origin, method
/// and headers back instead.
pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let credentials = config.allow_credentials;

    let origins = if allows_any_origin(config) {
        warn!("CORS allows every origin; restrict cors.allow_origins for production use");
        if credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::from(Any)
        }
    } else {
        let values = config
            .allow_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| AppError::InvalidCors(format!("origin '{}'", origin)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(values)
    };

    let methods = if is_wildcard(&config.allow_methods) {
        if credentials {
            AllowMethods::mirror_request()
        } else {
            AllowMethods::from(Any)
        }
    } else {
        let values = config
            .allow_methods
            .iter()
            .map(|method| {
                Method::from_bytes(method.to_uppercase().as_bytes())
                    .map_err(|_| AppError::InvalidCors(format!("method '{}'", method)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowMethods::list(values)
    };

    let headers = if is_wildcard(&config.allow_headers) {
        if credentials {
            AllowHeaders::mirror_request()
        } else {
            AllowHeaders::from(Any)
        }
    } else {
        let values = config
            .allow_headers
            .iter()
            .map(|header| {
                HeaderName::from_bytes(header.as_bytes())
                    .map_err(|_| AppError::InvalidCors(format!("header '{}'", header)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowHeaders::list(values)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(credentials))
}
