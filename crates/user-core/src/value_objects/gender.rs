//! Gender - fixed one-letter code set

use serde::{Serialize, Serializer};
use std::fmt;

/// Gender code accepted on a user record (`M`, `F`, `O`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// All accepted genders, in code order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// One-letter code as stored in the `gender` column
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
        }
    }

    /// Parse a code case-insensitively. Anything other than m/f/o is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("M") {
            Some(Self::Male)
        } else if s.eq_ignore_ascii_case("F") {
            Some(Self::Female)
        } else if s.eq_ignore_ascii_case("O") {
            Some(Self::Other)
        } else {
            None
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}
