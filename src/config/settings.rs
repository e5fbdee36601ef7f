//! Application settings and configuration management

use crate::error::{AppError, Result};
use crate::version::VersionReader;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub features: FeaturesConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Application metadata and documentation routes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Swagger UI route, `None` disables it
    #[serde(default = "default_docs_url")]
    pub docs_url: Option<String>,
    /// ReDoc route, `None` disables it
    #[serde(default = "default_redoc_url")]
    pub redoc_url: Option<String>,
    #[serde(default = "default_openapi_url")]
    pub openapi_url: String,
    /// Overrides the VERSION file location
    #[serde(default)]
    pub version_file: Option<PathBuf>,
}

fn default_title() -> String {
    "Feature Template API".to_string()
}

fn default_description() -> String {
    "A FastAPI-based template for feature development and deployment".to_string()
}

fn default_docs_url() -> Option<String> {
    Some("/docs".to_string())
}

fn default_redoc_url() -> Option<String> {
    Some("/redoc".to_string())
}

fn default_openapi_url() -> String {
    "/openapi.json".to_string()
}

impl AppConfig {
    /// Version reader for the configured (or default) VERSION file
    pub fn version_reader(&self) -> VersionReader {
        match &self.version_file {
            Some(path) => VersionReader::new(path),
            None => VersionReader::default(),
        }
    }
}

/// Cross-origin policy. `"*"` entries mean "everything".
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default = "default_wildcard")]
    pub allow_origins: Vec<String>,
    #[serde(default = "default_wildcard")]
    pub allow_methods: Vec<String>,
    #[serde(default = "default_wildcard")]
    pub allow_headers: Vec<String>,
    #[serde(default = "default_true")]
    pub allow_credentials: bool,
}

fn default_wildcard() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}

/// Optional feature router
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load settings from the default configuration file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/app.yaml")
    }

    /// Load settings from a specific configuration file.
    ///
    /// A missing file is fine; defaults and `FEATURE_API__*` environment
    /// variables still apply.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Determine file format
        let format = if path.extension().map_or(false, |ext| ext == "toml") {
            FileFormat::Toml
        } else {
            FileFormat::Yaml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("app.title", default_title())?
            .set_default("app.description", default_description())?
            .set_default("app.docs_url", default_docs_url())?
            .set_default("app.redoc_url", default_redoc_url())?
            .set_default("app.openapi_url", default_openapi_url())?
            .set_default("cors.allow_origins", default_wildcard())?
            .set_default("cors.allow_methods", default_wildcard())?
            .set_default("cors.allow_headers", default_wildcard())?
            .set_default("cors.allow_credentials", true)?
            .set_default("features.enabled", true)?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        if path.exists() {
            config_builder = config_builder.add_source(File::from(path).format(format));
        }

        // Add environment overrides
        config_builder = config_builder.add_source(
            Environment::with_prefix("FEATURE_API")
                .separator("__")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(invalid("Server port cannot be 0"));
        }

        let doc_routes = [
            self.app.docs_url.as_deref(),
            self.app.redoc_url.as_deref(),
            Some(self.app.openapi_url.as_str()),
        ];
        for route in doc_routes.iter().flatten() {
            if !route.starts_with('/') {
                return Err(invalid(format!(
                    "Documentation route '{}' must start with '/'",
                    route
                )));
            }
        }
        let mut seen: Vec<&str> = doc_routes.iter().flatten().copied().collect();
        seen.sort_unstable();
        if seen.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(invalid("Documentation routes must be distinct"));
        }

        if self.cors.allow_origins.is_empty() {
            return Err(invalid("cors.allow_origins cannot be empty"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::Config(config::ConfigError::Message(message.into()))
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            app: AppConfig {
                title: default_title(),
                description: default_description(),
                docs_url: default_docs_url(),
                redoc_url: default_redoc_url(),
                openapi_url: default_openapi_url(),
                version_file: None,
            },
            cors: CorsConfig {
                allow_origins: default_wildcard(),
                allow_methods: default_wildcard(),
                allow_headers: default_wildcard(),
                allow_credentials: true,
            },
            features: FeaturesConfig { enabled: true },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
