//! User identity types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Role;

/// An opaque user id assigned by the platform.
///
/// Treated as an opaque string; the backend issues it and embeds it in
/// token claims, the client never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user id from its wire representation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity half of a session: who the authenticated user is.
///
/// Tokens are deliberately kept out of this type; they live next to it in
/// the session so that identity can be displayed and serialized freely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque platform-assigned id.
    pub id: UserId,
    /// Login uid (student number or staff id).
    pub uid: String,
    /// Display name.
    pub username: String,
    /// Role tag.
    pub role: Role,
}

impl Identity {
    /// Create a new identity.
    pub fn new(
        id: impl Into<String>,
        uid: impl Into<String>,
        username: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::new(id),
            uid: uid.into(),
            username: username.into(),
            role,
        }
    }
}
