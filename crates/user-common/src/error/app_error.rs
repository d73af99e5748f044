//! Application error types
//!
//! Failures that stop the process before (or while) it serves traffic.
//! Request-level failures are `DomainError`s and never reach this type.

use crate::config::ConfigError;
use crate::telemetry::TracingError;

/// Process-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Tracing setup failed: {0}")]
    Tracing(#[from] TracingError),

    #[error("Service setup failed: {0}")]
    Setup(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Wrap a failure to assemble the services from the loaded settings
    pub fn setup(err: impl std::fmt::Display) -> Self {
        Self::Setup(err.to_string())
    }

    /// Wrap a connectivity or pool failure
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }

    /// Wrap a schema migration failure
    pub fn migration(err: impl std::fmt::Display) -> Self {
        Self::Migration(err.to_string())
    }

    /// Process exit code for this failure
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Setup(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias for process-level operations
pub type AppResult<T> = Result<T, AppError>;
