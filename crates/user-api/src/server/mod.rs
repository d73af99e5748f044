//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};
use user_common::{AppConfig, AppError};
use user_core::traits::UserRepository;
use user_db::{create_pool, run_migrations, PgPool, PgUserRepository, PoolConfig};
use user_service::ServiceContextBuilder;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(
        router,
        &state.config().app.name,
        state.service_context().call_timeout(),
    );
    router.with_state(state)
}

/// Wire a record store into the service layer and create AppState
pub fn create_app_state(
    config: AppConfig,
    user_repo: Arc<dyn UserRepository>,
) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .call_timeout(config.lifecycle.call_timeout)
        .build()
        .map_err(AppError::setup)?;

    Ok(AppState::new(service_context, config))
}

/// Connect to PostgreSQL, check it answers, and bring the schema up to date
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, AppError> {
    info!(
        max_connections = config.database.max_connections,
        "Connecting to PostgreSQL..."
    );
    let pool_config = PoolConfig::from_settings(&config.database, config.lifecycle.call_timeout);
    let pool = create_pool(&pool_config).await.map_err(AppError::database)?;

    PgUserRepository::new(pool.clone())
        .ping()
        .await
        .map_err(AppError::database)?;
    info!("PostgreSQL connection established");

    run_migrations(&pool).await.map_err(AppError::migration)?;
    info!("Database migrations applied");

    Ok(pool)
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, address: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(address).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.server.address.clone();

    let pool = connect_database(&config).await?;
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));

    let state = create_app_state(config, user_repo)?;
    let app = create_app(state);

    let served = run_server(app, &address).await;

    pool.close().await;
    info!("Database pool closed");

    served
}

/// Resolves on SIGINT, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
