//! Path parameter extractors
//!
//! Type-safe extraction of user ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use user_core::UserId;

use crate::response::ApiError;

/// The `:id` segment of `/users/:id`, parsed as a user id
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        let id = UserId::parse(&raw).map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(UserIdPath(id))
    }
}
