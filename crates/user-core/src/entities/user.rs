//! User entity - the caller-supplied attribute set and the stored record

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{is_valid_age, is_valid_email, Gender, UserId};

/// Mutable attributes of a user as supplied by a caller (create or update)
///
/// Nothing here is trusted: `gender` is the raw code and `age` may be out of
/// range (or out of `i16`) until [`UserInfo::validate`] succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub age: i64,
}

impl UserInfo {
    /// Apply the validation rules in order: email, gender, age.
    ///
    /// The first failing rule is reported; errors are not aggregated.
    pub fn validate(self) -> Result<ValidatedUser, DomainError> {
        if !is_valid_email(&self.email) {
            return Err(DomainError::InvalidEmail);
        }

        let gender = Gender::parse(&self.gender).ok_or(DomainError::InvalidGender)?;

        let age = i16::try_from(self.age)
            .ok()
            .filter(|age| is_valid_age(*age))
            .ok_or(DomainError::InvalidAge)?;

        Ok(ValidatedUser {
            username: self.username,
            first_name: self.first_name,
            middle_name: self.middle_name.filter(|m| !m.is_empty()),
            last_name: self.last_name,
            email: self.email,
            gender,
            age,
        })
    }
}

/// Attribute set that passed validation; the only shape the store accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUser {
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub age: i16,
}

/// A user row as held by the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub gender: Gender,
    pub age: i16,
    pub begin_date: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Soft-delete marker. Once set it is never cleared.
    pub end_date: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// Build a fresh, active record from validated attributes
    pub fn new(id: UserId, user: ValidatedUser, begin_date: DateTime<Utc>) -> Self {
        Self {
            id,
            username: user.username,
            first_name: user.first_name,
            middle_name: user.middle_name,
            last_name: user.last_name,
            email: user.email,
            gender: user.gender,
            age: user.age,
            begin_date,
            updated_at: None,
            end_date: None,
        }
    }

    /// Check if the record is soft deleted
    #[inline]
    pub fn is_gone(&self) -> bool {
        self.end_date.is_some()
    }

    /// Overwrite every mutable attribute, leaving id and lifecycle marker alone
    pub fn overwrite(&mut self, user: ValidatedUser, now: DateTime<Utc>) {
        self.username = user.username;
        self.first_name = user.first_name;
        self.middle_name = user.middle_name;
        self.last_name = user.last_name;
        self.email = user.email;
        self.gender = user.gender;
        self.age = user.age;
        self.updated_at = Some(now);
    }

    /// Project the record back onto its mutable attributes
    pub fn attributes(&self) -> ValidatedUser {
        ValidatedUser {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            gender: self.gender,
            age: self.age,
        }
    }
}
