//! Route requirements and client-side redirect boundaries.
//!
//! Protected entry points carry a [`RouteRequirements`] value describing
//! which authentication and role checks must pass before the action runs.
//! When a guard rejects an action it names a [`Boundary`] - the client-side
//! page the user is sent to instead.

use std::fmt;

use crate::types::Role;

/// Declarative requirements for a guarded entry point.
///
/// Mirrors the metadata attached to each route: whether authentication is
/// needed at all, and whether the route is restricted to teaching staff or
/// administrators. Role restrictions imply `requires_auth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteRequirements {
    /// The entry point needs a valid authenticated session.
    pub requires_auth: bool,
    /// The entry point is restricted to teachers (admins also pass).
    pub requires_teacher: bool,
    /// The entry point is restricted to administrators.
    pub requires_admin: bool,
}

impl RouteRequirements {
    /// An unguarded entry point; no checks are performed.
    pub fn public() -> Self {
        Self::default()
    }

    /// Requires a valid session but no particular role.
    pub fn authenticated() -> Self {
        Self {
            requires_auth: true,
            ..Self::default()
        }
    }

    /// Requires a valid session with the teacher or admin role.
    pub fn teacher() -> Self {
        Self {
            requires_auth: true,
            requires_teacher: true,
            requires_admin: false,
        }
    }

    /// Requires a valid session with the admin role.
    pub fn admin() -> Self {
        Self {
            requires_auth: true,
            requires_teacher: false,
            requires_admin: true,
        }
    }

    /// Check the role restrictions against an authenticated role.
    ///
    /// Authentication itself is checked by the guard before this runs;
    /// a missing role never satisfies a restriction.
    pub fn permits(&self, role: Option<Role>) -> bool {
        if self.requires_teacher && !role.is_some_and(Role::is_staff) {
            return false;
        }
        if self.requires_admin && !role.is_some_and(Role::is_admin) {
            return false;
        }
        true
    }
}

/// A client-side boundary a guarded action may be redirected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The login page; the session is absent or no longer renewable.
    Login,
    /// The 403 page; authenticated but not permitted.
    Forbidden,
    /// The 404 page; the requested resource does not exist.
    NotFound,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Boundary::Login => "login",
            Boundary::Forbidden => "forbidden",
            Boundary::NotFound => "not-found",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_requirement_admits_teacher_and_admin() {
        let requirements = RouteRequirements::teacher();
        assert!(requirements.permits(Some(Role::Teacher)));
        assert!(requirements.permits(Some(Role::Admin)));
        assert!(!requirements.permits(Some(Role::Student)));
        assert!(!requirements.permits(None));
    }

    #[test]
    fn admin_requirement_admits_admin_only() {
        let requirements = RouteRequirements::admin();
        assert!(requirements.permits(Some(Role::Admin)));
        assert!(!requirements.permits(Some(Role::Teacher)));
        assert!(!requirements.permits(Some(Role::Student)));
    }

    #[test]
    fn plain_auth_requirement_has_no_role_restriction() {
        let requirements = RouteRequirements::authenticated();
        assert!(requirements.permits(Some(Role::Student)));
        assert!(requirements.permits(None));
    }
}
