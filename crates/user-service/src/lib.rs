//! # user-service
//!
//! Application layer: the user lifecycle service and the DTOs the transport
//! speaks.

pub mod dto;
pub mod services;

pub use services::{ServiceContext, ServiceContextBuilder, ServiceResult, UserService};
