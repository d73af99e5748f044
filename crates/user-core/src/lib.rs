//! # user-core
//!
//! Domain layer containing the user entity, validation rules, the domain error
//! enumeration and the record store trait.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{UserInfo, UserRecord, ValidatedUser};
pub use error::DomainError;
pub use traits::{RepoError, RepoResult, UserRepository};
pub use value_objects::{Gender, UserId, UserIdParseError};
