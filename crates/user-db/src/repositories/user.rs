//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use user_core::entities::{UserRecord, ValidatedUser};
use user_core::traits::{RepoError, RepoResult, UserRepository};
use user_core::value_objects::UserId;

use crate::mappers::UserColumns;
use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool, for shutdown
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn create_row(&self, user: &ValidatedUser) -> RepoResult<UserId> {
        let columns = UserColumns::new(user);

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (username, first_name, middle_name, last_name, email, gender, age, beg_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING id
            ",
        )
        .bind(columns.username)
        .bind(columns.first_name)
        .bind(columns.middle_name)
        .bind(columns.last_name)
        .bind(columns.email)
        .bind(columns.gender)
        .bind(columns.age)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(UserId::new(id))
    }

    #[instrument(skip(self))]
    async fn fetch_row(&self, id: UserId) -> RepoResult<Option<UserRecord>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, first_name, middle_name, last_name, email, gender, age,
                   beg_date, updated_at, end_date
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(UserRecord::try_from).transpose()
    }

    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn overwrite_row(&self, id: UserId, user: &ValidatedUser) -> RepoResult<()> {
        let columns = UserColumns::new(user);

        let result = sqlx::query(
            r"
            UPDATE users
            SET username = $2, first_name = $3, middle_name = $4, last_name = $5,
                email = $6, gender = $7, age = $8, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(columns.username)
        .bind(columns.first_name)
        .bind(columns.middle_name)
        .bind(columns.last_name)
        .bind(columns.email)
        .bind(columns.gender)
        .bind(columns.age)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_row_ended(&self, id: UserId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET end_date = NOW()
            WHERE id = $1 AND end_date IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
