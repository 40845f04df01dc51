//! User role type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The role a user authenticates as.
///
/// The platform recognizes exactly three roles. Role restrictions on
/// guarded entry points are evaluated against this tag: admins pass every
/// restriction, teachers pass staff restrictions, students pass none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A learner enrolled in courses.
    Student,
    /// An instructor for one or more courses.
    Teacher,
    /// A platform administrator.
    Admin,
}

impl Role {
    /// Returns true for the admin role.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Returns true for teaching staff (teacher or admin).
    pub fn is_staff(self) -> bool {
        matches!(self, Role::Teacher | Role::Admin)
    }

    /// Returns the wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(InvalidInputError::Role {
                value: other.to_string(),
            }
            .into()),
        }
    }
}
