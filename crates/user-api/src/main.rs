//! User API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p user-api -- -a localhost:3000 -d postgres://localhost/users
//! ```
//!
//! Configuration is loaded from flags and environment variables; the
//! environment wins when both are set.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use user_common::{try_init_tracing, AppConfig, AppError, CliArgs, TracingConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliArgs::parse();

    // Load configuration
    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::from(AppError::from(e).exit_code());
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing(&TracingConfig::for_app(&config.app)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        service = %config.app.name,
        env = ?config.app.env,
        address = %config.server.address,
        call_timeout_ms = config.lifecycle.call_timeout.as_millis() as u64,
        "Configuration loaded"
    );

    // Run the server
    match user_api::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server failed");
            ExitCode::from(e.exit_code())
        }
    }
}
