//! Login credentials type.

use std::fmt;

use crate::types::Role;

/// Login credentials for platform authentication.
///
/// Holds the login uid, the password, and the role the user is signing in
/// as. The platform keeps separate account tables per role, so the role is
/// part of the authentication exchange rather than something the server
/// infers.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use ojx_core::{Credentials, Role};
///
/// let creds = Credentials::new("2023011234", "hunter2", Role::Student);
/// assert_eq!(creds.uid(), "2023011234");
/// ```
pub struct Credentials {
    uid: String,
    password: String,
    role: Role,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `uid` - The login uid (student number or staff id)
    /// * `password` - The account password
    /// * `role` - The role to authenticate as
    pub fn new(uid: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            uid: uid.into(),
            password: password.into(),
            role,
        }
    }

    /// Returns the login uid.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing the login request.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the role being authenticated as.
    pub fn role(&self) -> Role {
        self.role
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("uid", &self.uid)
            .field("password", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

// Clone is intentionally derived to allow credentials to be reused,
// but the type is not Copy to make credential passing explicit.
impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            uid: self.uid.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("2023011234", "secret123", Role::Student);
        let debug = format!("{:?}", creds);
        assert!(debug.contains("2023011234"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
