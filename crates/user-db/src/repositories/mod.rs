//! Repository implementations
//!
//! Implementations of the `UserRepository` port defined in user-core: the
//! PostgreSQL store used in production and an in-memory store for tests.

mod error;
mod memory;
mod user;

pub use memory::InMemoryUserRepository;
pub use user::PgUserRepository;
