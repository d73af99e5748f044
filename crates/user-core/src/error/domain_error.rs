//! Domain errors - error kinds surfaced by the user lifecycle

use thiserror::Error;

use crate::traits::RepoError;

/// Domain layer errors
///
/// A closed set: callers match on the variant, never on the message.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid gender, available is: F/M/O")]
    InvalidGender,

    #[error("invalid age, the age must be between 1 and 150")]
    InvalidAge,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("username is already taken")]
    UsernameAlreadyTaken,

    #[error("user has been deleted once")]
    UserHasBeenDeletedOnce,

    // =========================================================================
    // Lookup Errors
    // =========================================================================
    #[error("user does not exist")]
    UserDoesNotExist,

    #[error("user is gone")]
    UserIsGone,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("storage failure: {0}")]
    StorageFailure(#[source] RepoError),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidGender => "INVALID_GENDER",
            Self::InvalidAge => "INVALID_AGE",
            Self::UsernameAlreadyTaken => "USERNAME_ALREADY_TAKEN",
            Self::UserHasBeenDeletedOnce => "USER_HAS_BEEN_DELETED_ONCE",
            Self::UserDoesNotExist => "USER_DOES_NOT_EXIST",
            Self::UserIsGone => "USER_IS_GONE",
            Self::StorageFailure(_) => "STORAGE_FAILURE",
        }
    }

    /// Check if the input was rejected before any store access
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail | Self::InvalidGender | Self::InvalidAge
        )
    }

    /// Check if this is a conflict with existing state
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyTaken | Self::UserHasBeenDeletedOnce)
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserDoesNotExist)
    }

    /// Only storage failures may be retried, and only by the caller
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageFailure(_))
    }

    /// Check if the storage failure was a deadline expiry
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::StorageFailure(RepoError::Timeout))
    }
}
