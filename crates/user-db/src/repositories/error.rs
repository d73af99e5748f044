//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use user_core::traits::RepoError;

/// Convert SQLx error to RepoError
pub fn map_db_error(e: SqlxError) -> RepoError {
    match e {
        SqlxError::PoolTimedOut => RepoError::Timeout,
        SqlxError::RowNotFound => RepoError::NotFound,
        other => RepoError::Database(other.to_string()),
    }
}

/// Check for unique violation and report it as a duplicate key
pub fn map_unique_violation(e: SqlxError) -> RepoError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return RepoError::DuplicateKey;
        }
    }
    map_db_error(e)
}
