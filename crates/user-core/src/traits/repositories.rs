//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Store outcomes stay storage-flavoured here
//! (duplicate key, not found); turning them into domain errors is the
//! lifecycle service's job.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{UserRecord, ValidatedUser};
use crate::value_objects::UserId;

/// Store-level failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    /// A uniqueness constraint rejected the write
    #[error("duplicate key")]
    DuplicateKey,

    /// The statement matched no row
    #[error("row not found")]
    NotFound,

    /// The deadline elapsed before the store answered
    #[error("operation timed out")]
    Timeout,

    /// Anything else the engine reported (connectivity, schema mismatch, ...)
    #[error("database error: {0}")]
    Database(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new row; the store assigns the id and the begin date
    async fn create_row(&self, user: &ValidatedUser) -> RepoResult<UserId>;

    /// Point lookup by id, soft-deleted rows included
    async fn fetch_row(&self, id: UserId) -> RepoResult<Option<UserRecord>>;

    /// Overwrite every mutable column of an existing row
    async fn overwrite_row(&self, id: UserId, user: &ValidatedUser) -> RepoResult<()>;

    /// Set the end date to now if it is still unset.
    ///
    /// Returns `false` when no active row matched: already ended, or absent.
    async fn mark_row_ended(&self, id: UserId) -> RepoResult<bool>;

    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
