//! Traits (ports) implemented by the infrastructure layer

mod repositories;

pub use repositories::{RepoError, RepoResult, UserRepository};
