//! # user-common
//!
//! Process plumbing shared by the binaries: configuration, telemetry and
//! startup errors.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, CliArgs, ConfigError, DatabaseConfig, Environment, LifecycleConfig,
    ServerConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
