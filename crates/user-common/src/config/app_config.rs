//! Application configuration structs
//!
//! Loads configuration from command-line flags and environment variables.
//! When both are present the environment wins.

use clap::Parser;
use std::env;
use std::time::Duration;
use tracing::Level;

/// Command-line flags
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "user-api", about = "User management REST API")]
pub struct CliArgs {
    /// Address (host:port) the HTTP server listens on
    #[arg(short = 'a', long = "address")]
    pub run_address: Option<String>,

    /// PostgreSQL connection string
    #[arg(short = 'd', long = "database-dsn")]
    pub database_dsn: Option<String>,
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub lifecycle: LifecycleConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
    pub log_level: Level,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// host:port
    pub address: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    /// Upper bound of concurrent connections; extra callers queue
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Per-call limits applied by the lifecycle service
#[derive(Debug, Clone, Copy)]
pub struct LifecycleConfig {
    pub call_timeout: Duration,
}

// Default value functions
fn default_app_name() -> String {
    "user-management".to_string()
}

fn default_run_address() -> String {
    "localhost:3000".to_string()
}

fn default_max_connections() -> u32 {
    50
}

fn default_min_connections() -> u32 {
    1
}

fn default_call_timeout() -> Duration {
    Duration::from_secs(5)
}

impl AppConfig {
    /// Load configuration from flags and environment variables
    ///
    /// A `.env` file is read first if present.
    ///
    /// # Errors
    /// Returns an error if the database DSN is missing or a value fails to parse
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_sources(cli, |key| env::var(key).ok())
    }

    /// Build configuration from flags and an arbitrary variable lookup
    pub fn from_sources<F>(cli: &CliArgs, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let run_address = lookup("RUN_ADDRESS")
            .or_else(|| cli.run_address.clone())
            .unwrap_or_else(default_run_address);

        let database_url = lookup("DATABASE_DSN")
            .or_else(|| cli.database_dsn.clone())
            .filter(|dsn| !dsn.is_empty())
            .ok_or(ConfigError::MissingVar("DATABASE_DSN"))?;

        let env = match lookup("APP_ENV") {
            Some(raw) => Environment::parse(&raw)
                .ok_or(ConfigError::InvalidValue("APP_ENV", raw))?,
            None => Environment::default(),
        };

        let log_level = parse_var(&lookup, "LOG_LEVEL")?.unwrap_or(Level::INFO);

        let max_connections =
            parse_var(&lookup, "DB_POOL_WORKERS")?.unwrap_or_else(default_max_connections);
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_POOL_WORKERS", "0".to_string()));
        }

        let call_timeout = parse_var::<u64, _>(&lookup, "CTX_TIMEOUT")?
            .map_or_else(default_call_timeout, Duration::from_millis);
        if call_timeout.is_zero() {
            return Err(ConfigError::InvalidValue("CTX_TIMEOUT", "0".to_string()));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("SERVICE_NAME").unwrap_or_else(default_app_name),
                env,
                log_level,
            },
            server: ServerConfig {
                address: run_address,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
                min_connections: default_min_connections().min(max_connections),
            },
            lifecycle: LifecycleConfig { call_timeout },
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
