//! Entity to model mappers
//!
//! - `TryFrom<UserModel> for UserRecord`: convert database rows to domain objects
//! - `UserColumns`: borrow validated attributes for insert/update binds

mod user;

pub use user::UserColumns;
