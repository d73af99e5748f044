//! User service
//!
//! Create, read, update and soft-delete user records.

use std::future::Future;

use tracing::instrument;
use user_core::entities::{UserInfo, UserRecord};
use user_core::error::DomainError;
use user_core::traits::RepoError;
use user_core::value_objects::UserId;

use super::context::ServiceContext;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, DomainError>;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and store a new user, returning the assigned id
    #[instrument(skip(self, info), fields(username = %info.username))]
    pub async fn create_user(&self, info: UserInfo) -> ServiceResult<UserId> {
        let user = info.validate()?;

        self.with_deadline(async {
            self.ctx
                .user_repo()
                .create_row(&user)
                .await
                .map_err(|e| match e {
                    RepoError::DuplicateKey => DomainError::UsernameAlreadyTaken,
                    other => DomainError::StorageFailure(other),
                })
        })
        .await
    }

    /// Get an active user
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserRecord> {
        self.with_deadline(self.find_active(user_id)).await
    }

    /// Overwrite every mutable attribute of an active user
    #[instrument(skip(self, info))]
    pub async fn update_user(&self, user_id: UserId, info: UserInfo) -> ServiceResult<()> {
        self.with_deadline(async {
            self.find_active(user_id).await?;
            let user = info.validate()?;

            self.ctx
                .user_repo()
                .overwrite_row(user_id, &user)
                .await
                .map_err(|e| match e {
                    RepoError::DuplicateKey => DomainError::UsernameAlreadyTaken,
                    RepoError::NotFound => DomainError::UserDoesNotExist,
                    other => DomainError::StorageFailure(other),
                })
        })
        .await
    }

    /// Soft delete a user. Deleting twice is an error, not a no-op.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: UserId) -> ServiceResult<()> {
        self.with_deadline(async {
            let record = self
                .ctx
                .user_repo()
                .fetch_row(user_id)
                .await
                .map_err(DomainError::StorageFailure)?
                .ok_or(DomainError::UserDoesNotExist)?;

            if record.is_gone() {
                return Err(DomainError::UserHasBeenDeletedOnce);
            }

            // Lost a race with another delete of the same id
            let ended = self
                .ctx
                .user_repo()
                .mark_row_ended(user_id)
                .await
                .map_err(DomainError::StorageFailure)?;
            if !ended {
                return Err(DomainError::UserHasBeenDeletedOnce);
            }

            Ok(())
        })
        .await
    }

    /// Check that the record store answers within the deadline
    #[instrument(skip(self))]
    pub async fn check_storage(&self) -> ServiceResult<()> {
        self.with_deadline(async {
            self.ctx
                .user_repo()
                .ping()
                .await
                .map_err(DomainError::StorageFailure)
        })
        .await
    }

    async fn find_active(&self, user_id: UserId) -> ServiceResult<UserRecord> {
        let record = self
            .ctx
            .user_repo()
            .fetch_row(user_id)
            .await
            .map_err(DomainError::StorageFailure)?
            .ok_or(DomainError::UserDoesNotExist)?;

        if record.is_gone() {
            return Err(DomainError::UserIsGone);
        }

        Ok(record)
    }

    /// Run `op` under the configured per-call timeout. On expiry the future is
    /// dropped, which cancels any in-flight query.
    async fn with_deadline<T, F>(&self, op: F) -> ServiceResult<T>
    where
        F: Future<Output = ServiceResult<T>>,
    {
        tokio::time::timeout(self.ctx.call_timeout(), op)
            .await
            .unwrap_or_else(|_| Err(DomainError::StorageFailure(RepoError::Timeout)))
    }
}
