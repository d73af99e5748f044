//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub age: i16,
    pub beg_date: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
