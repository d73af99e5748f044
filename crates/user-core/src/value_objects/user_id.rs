//! User ID - store-assigned numeric identifier
//!
//! Ids come from the `users.id` sequence. They are immutable once assigned
//! and never reused, so the newtype carries no generation logic of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a UserId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation (path parameters)
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        s.trim()
            .parse::<i64>()
            .map(UserId)
            .map_err(|_| UserIdParseError::InvalidFormat(s.to_string()))
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id: {0}")]
    InvalidFormat(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}
