//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CliArgs, ConfigError, DatabaseConfig, Environment, LifecycleConfig,
    ServerConfig,
};
