//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with structural validation for API inputs
//! - Response DTOs for serializing API outputs

pub mod requests;
pub mod responses;

pub use requests::UserRequest;
pub use responses::{
    HealthChecks, HealthResponse, MessageResponse, ReadinessResponse, UserResponse,
};
