//! User entity <-> model mapper

use user_core::entities::{UserRecord, ValidatedUser};
use user_core::traits::RepoError;
use user_core::value_objects::{Gender, UserId};

use crate::models::UserModel;

/// Convert a row into a record.
///
/// Fails only if the stored gender code is outside the known set, which the
/// table's CHECK constraint should already rule out.
impl TryFrom<UserModel> for UserRecord {
    type Error = RepoError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let gender = Gender::parse(model.gender.trim()).ok_or_else(|| {
            RepoError::Database(format!(
                "row {} has unknown gender code {:?}",
                model.id, model.gender
            ))
        })?;

        Ok(UserRecord {
            id: UserId::new(model.id),
            username: model.username,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            email: model.email,
            gender,
            age: model.age,
            begin_date: model.beg_date,
            updated_at: model.updated_at,
            end_date: model.end_date,
        })
    }
}

/// Borrowed column values for insert and update statements
pub struct UserColumns<'a> {
    pub username: &'a str,
    pub first_name: &'a str,
    pub middle_name: Option<&'a str>,
    pub last_name: &'a str,
    pub email: &'a str,
    pub gender: &'static str,
    pub age: i16,
}

impl<'a> UserColumns<'a> {
    pub fn new(user: &'a ValidatedUser) -> Self {
        Self {
            username: &user.username,
            first_name: &user.first_name,
            middle_name: user.middle_name.as_deref(),
            last_name: &user.last_name,
            email: &user.email,
            gender: user.gender.code(),
            age: user.age,
        }
    }
}
