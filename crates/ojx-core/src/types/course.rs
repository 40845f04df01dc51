//! Course reference types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A course id assigned by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(i64);

impl CourseId {
    /// Create a course id from its wire representation.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to a course the user is associated with.
///
/// Students are enrolled in courses, teachers are assigned to them; the
/// session holds these as an ordered list, and the first one becomes the
/// default active course for non-admin users.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseRef {
    /// Platform-assigned course id.
    pub id: CourseId,
    /// Course display name.
    pub name: String,
}

impl CourseRef {
    /// Create a new course reference.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CourseId::new(id),
            name: name.into(),
        }
    }
}
