//! User handlers
//!
//! Create, read, replace and soft-delete users. Each handler runs exactly one
//! lifecycle operation.

use axum::{extract::State, Json};
use user_service::dto::{MessageResponse, UserRequest, UserResponse};
use user_service::UserService;

use crate::extractors::{UserIdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a user; the body is the new id as plain text
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UserRequest>,
) -> ApiResult<Created<String>> {
    let service = UserService::new(state.service_context());
    let id = service.create_user(request.into()).await?;
    Ok(Created(id.to_string()))
}

/// Get an active user
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let record = service.get_user(user_id).await?;
    Ok(Json(UserResponse::from(record)))
}

/// Replace every mutable attribute of an active user
///
/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
    JsonBody(request): JsonBody<UserRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    service.update_user(user_id, request.into()).await?;
    Ok(Json(MessageResponse::success()))
}

/// Soft delete a user
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    service.delete_user(user_id).await?;
    Ok(Json(MessageResponse::success()))
}
