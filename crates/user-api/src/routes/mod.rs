//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, users};
use crate::state::AppState;

/// Create the router with every route
pub fn create_router() -> Router<AppState> {
    Router::new().merge(health_routes()).merge(user_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/healthcheck", get(health::alive))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
}
