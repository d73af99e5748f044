//! In-memory implementation of UserRepository
//!
//! Same observable behaviour as the Postgres store: ids are assigned from 1
//! upward and usernames stay unique across active and soft-deleted rows.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use user_core::entities::{UserRecord, ValidatedUser};
use user_core::traits::{RepoError, RepoResult, UserRepository};
use user_core::value_objects::UserId;

#[derive(Default)]
struct Table {
    rows: BTreeMap<UserId, UserRecord>,
    last_id: i64,
}

impl Table {
    fn username_taken(&self, username: &str, except: Option<UserId>) -> bool {
        self.rows
            .values()
            .any(|row| row.username == username && Some(row.id) != except)
    }
}

/// Process-local user store
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows held, soft-deleted ones included
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_row(&self, user: &ValidatedUser) -> RepoResult<UserId> {
        let mut table = self.table.write();
        if table.username_taken(&user.username, None) {
            return Err(RepoError::DuplicateKey);
        }

        table.last_id += 1;
        let id = UserId::new(table.last_id);
        table
            .rows
            .insert(id, UserRecord::new(id, user.clone(), Utc::now()));

        Ok(id)
    }

    async fn fetch_row(&self, id: UserId) -> RepoResult<Option<UserRecord>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn overwrite_row(&self, id: UserId, user: &ValidatedUser) -> RepoResult<()> {
        let mut table = self.table.write();
        if table.username_taken(&user.username, Some(id)) {
            return Err(RepoError::DuplicateKey);
        }

        let row = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        row.overwrite(user.clone(), Utc::now());

        Ok(())
    }

    async fn mark_row_ended(&self, id: UserId) -> RepoResult<bool> {
        let mut table = self.table.write();
        match table.rows.get_mut(&id) {
            Some(row) if row.end_date.is_none() => {
                row.end_date = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
