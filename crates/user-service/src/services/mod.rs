//! Business logic services
//!
//! Every mutation passes through validation and the active / soft-deleted
//! state checks here before it reaches the record store.

pub mod context;
pub mod user;

pub use context::{ContextError, ServiceContext, ServiceContextBuilder};
pub use user::{ServiceResult, UserService};
