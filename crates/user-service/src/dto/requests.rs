//! Request DTOs for API endpoints
//!
//! Request DTOs only describe the payload shape. Every attribute rule
//! (email, gender, age) belongs to the domain, so nothing is rejected here
//! that the lifecycle service would accept.

use serde::Deserialize;
use user_core::entities::UserInfo;

/// Create or replace a user
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    pub username: String,

    pub first_name: String,

    #[serde(default)]
    pub middle_name: Option<String>,

    pub last_name: String,

    pub email: String,

    pub gender: String,

    /// Wider than the column so out-of-range ages reach the age rule
    pub age: i64,
}

impl From<UserRequest> for UserInfo {
    fn from(request: UserRequest) -> Self {
        UserInfo {
            username: request.username,
            first_name: request.first_name,
            middle_name: request.middle_name,
            last_name: request.last_name,
            email: request.email,
            gender: request.gender,
            age: request.age,
        }
    }
}
