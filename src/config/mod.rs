//! Configuration module

mod settings;

pub use settings::{
    AppConfig, CorsConfig, FeaturesConfig, LoggingConfig, ServerConfig, Settings,
};
