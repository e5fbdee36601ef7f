//! API endpoint integration tests

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use feature_template_api::config::Settings;
use feature_template_api::create_app;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    version_file: PathBuf,
    _dir: TempDir,
}

/// App whose VERSION file lives in a temp dir; `None` leaves it absent
fn create_test_app(version: Option<&str>) -> TestApp {
    create_test_app_with(version, |_| {})
}

fn create_test_app_with(version: Option<&str>, configure: impl FnOnce(&mut Settings)) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let version_file = dir.path().join("VERSION");
    if let Some(contents) = version {
        fs::write(&version_file, contents).unwrap();
    }

    let mut settings = Settings::default();
    settings.app.version_file = Some(version_file.clone());
    configure(&mut settings);

    TestApp {
        router: create_app(settings).unwrap().into_router(),
        version_file,
        _dir: dir,
    }
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn status_of(router: &Router, uri: &str) -> StatusCode {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn test_root_reports_version() {
    let app = create_test_app(Some("2.3.1\n"));

    let (status, body) = get(&app.router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": "Welcome to the Feature Template API", "version": "2.3.1"})
    );
}

#[tokio::test]
async fn test_health_without_version_file() {
    let app = create_test_app(None);

    let (status, body) = get(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "version": "unknown"}));
}

#[tokio::test]
async fn test_bodies_have_exactly_two_keys() {
    let app = create_test_app(Some("  weird version text  "));

    let (_, root) = get(&app.router, "/").await;
    let (_, health) = get(&app.router, "/health").await;

    let root = root.as_object().unwrap();
    assert_eq!(root.len(), 2);
    assert_eq!(root["message"], "Welcome to the Feature Template API");
    assert_eq!(root["version"], "weird version text");

    let health = health.as_object().unwrap();
    assert_eq!(health.len(), 2);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], "weird version text");
}

#[tokio::test]
async fn test_version_changes_are_visible_without_restart() {
    let app = create_test_app(Some("1.0.0"));

    let (_, before) = get(&app.router, "/").await;
    fs::write(&app.version_file, "1.1.0\n").unwrap();
    let (_, after) = get(&app.router, "/health").await;
    fs::remove_file(&app.version_file).unwrap();
    let (_, removed) = get(&app.router, "/").await;

    assert_eq!(before["version"], "1.0.0");
    assert_eq!(after["version"], "1.1.0");
    assert_eq!(removed["version"], "unknown");
}

#[tokio::test]
async fn test_unreadable_version_file_is_server_error() {
    let app = create_test_app(Some("1.0.0"));
    fs::remove_file(&app.version_file).unwrap();
    fs::create_dir(&app.version_file).unwrap();

    let (status, body) = get(&app.router, "/health").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("VERSION"));
}

#[tokio::test]
async fn test_docs_routes_are_served() {
    let app = create_test_app(Some("0.4.2"));

    assert_eq!(status_of(&app.router, "/docs").await, StatusCode::OK);
    assert_eq!(status_of(&app.router, "/docs/").await, StatusCode::OK);
    assert_eq!(status_of(&app.router, "/redoc").await, StatusCode::OK);

    let (status, doc) = get(&app.router, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Feature Template API");
    assert_eq!(doc["info"]["version"], "0.4.2");
    assert!(doc["paths"].get("/").is_some());
    assert!(doc["paths"].get("/health").is_some());
}

#[tokio::test]
async fn test_docs_page_is_html_without_redirect() {
    let app = create_test_app(Some("1.0.0"));

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_docs_routes_can_be_disabled() {
    let app = create_test_app_with(Some("1.0.0"), |settings| {
        settings.app.docs_url = None;
        settings.app.redoc_url = None;
    });

    assert_eq!(status_of(&app.router, "/docs").await, StatusCode::NOT_FOUND);
    assert_eq!(status_of(&app.router, "/docs/").await, StatusCode::NOT_FOUND);
    assert_eq!(status_of(&app.router, "/redoc").await, StatusCode::NOT_FOUND);
    assert_eq!(status_of(&app.router, "/openapi.json").await, StatusCode::OK);
}

#[tokio::test]
async fn test_cors_echoes_origin_with_credentials() {
    let app = create_test_app(Some("1.0.0"));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://client.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://client.example.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn test_cors_preflight_allows_any_method_and_header() {
    let app = create_test_app(Some("1.0.0"));

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/health")
                .header(header::ORIGIN, "https://client.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "DELETE");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "x-custom-token");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app(Some("1.0.0"));

    assert_eq!(status_of(&app.router, "/missing").await, StatusCode::NOT_FOUND);
}
