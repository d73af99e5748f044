//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data.
///
/// Usernames stay taken after a soft delete, so the suffix also has to differ
/// between runs against the same database.
pub fn unique_suffix() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{nanos}_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Create / update payload
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub username: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub age: i16,
}

impl UserPayload {
    pub fn unique() -> Self {
        Self {
            username: format!("testuser_{}", unique_suffix()),
            first_name: "Test".to_string(),
            middle_name: None,
            last_name: "User".to_string(),
            email: "test.user@example.com".to_string(),
            gender: "F".to_string(),
            age: 30,
        }
    }
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub age: i16,
}

/// Acknowledgement body
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
