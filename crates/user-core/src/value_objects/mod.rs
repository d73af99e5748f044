//! Value objects - immutable types that represent domain concepts

mod contact;
mod gender;
mod user_id;

pub use contact::{is_valid_age, is_valid_email, MAX_AGE, MIN_AGE};
pub use gender::Gender;
pub use user_id::{UserId, UserIdParseError};
