//! Client session state.

use crate::tokens::{AccessToken, RefreshToken};
use crate::types::{CourseId, CourseRef, Identity, Role};

/// The client-held record of the current identity and credentials.
///
/// A session is either authenticated (identity and both tokens present) or
/// empty; it starts empty, is populated by a successful authentication
/// exchange, and is cleared on logout or unrecoverable refresh failure.
/// All mutation goes through the methods here - fields are never reached
/// into from outside, so the invariants hold by construction.
///
/// This is plain state. Shared, synchronized access is provided by
/// [`SessionStore`](crate::store::SessionStore).
#[derive(Clone, Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
    access_token: Option<AccessToken>,
    refresh_token: Option<RefreshToken>,
    enrollments: Vec<CourseRef>,
    active_course: Option<CourseId>,
}

impl Session {
    /// Create an empty, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a session from previously persisted parts.
    ///
    /// The caller is responsible for ensuring the tokens are still valid;
    /// the guards will renew or clear them as needed.
    pub fn from_parts(
        identity: Identity,
        access_token: AccessToken,
        refresh_token: Option<RefreshToken>,
        enrollments: Vec<CourseRef>,
        active_course: Option<CourseId>,
    ) -> Self {
        Self {
            identity: Some(identity),
            access_token: Some(access_token),
            refresh_token,
            enrollments,
            active_course,
        }
    }

    /// Replace the entire session after a successful authentication exchange.
    ///
    /// All fields are replaced together; nothing from a previous session
    /// survives. The active course is recomputed: admins get no default,
    /// everyone else defaults to their first enrollment.
    pub fn set_session(
        &mut self,
        identity: Identity,
        access_token: AccessToken,
        refresh_token: RefreshToken,
        enrollments: Vec<CourseRef>,
    ) {
        self.active_course = Self::default_active_course(identity.role, &enrollments);
        self.identity = Some(identity);
        self.access_token = Some(access_token);
        self.refresh_token = Some(refresh_token);
        self.enrollments = enrollments;
    }

    /// Select the active course.
    ///
    /// Membership in `enrollments` is not checked here; callers that care
    /// (the CLI does) validate before switching.
    pub fn set_active_course(&mut self, course: CourseId) {
        self.active_course = Some(course);
    }

    /// Swap in a renewed access token, leaving everything else untouched.
    pub fn set_access_token(&mut self, token: AccessToken) {
        self.access_token = Some(token);
    }

    /// Reset every field to its empty default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true when an access token is present.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Returns the authenticated identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Returns the authenticated role, if any.
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    /// Returns the current access token, if any.
    pub fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the current refresh token, if any.
    pub fn refresh_token(&self) -> Option<&RefreshToken> {
        self.refresh_token.as_ref()
    }

    /// Returns the ordered course enrollments.
    pub fn enrollments(&self) -> &[CourseRef] {
        &self.enrollments
    }

    /// Returns the currently selected course, if any.
    pub fn active_course(&self) -> Option<CourseId> {
        self.active_course
    }

    fn default_active_course(role: Role, enrollments: &[CourseRef]) -> Option<CourseId> {
        if role.is_admin() {
            None
        } else {
            enrollments.first().map(|course| course.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher_identity() -> Identity {
        Identity::new("7", "t0042", "Prof. Song", Role::Teacher)
    }

    #[test]
    fn set_session_defaults_to_first_enrollment() {
        let mut session = Session::new();
        session.set_session(
            teacher_identity(),
            AccessToken::new("access"),
            RefreshToken::new("refresh"),
            vec![CourseRef::new(1, "Algorithms"), CourseRef::new(2, "Compilers")],
        );

        assert!(session.is_authenticated());
        assert_eq!(session.active_course(), Some(CourseId::new(1)));
    }

    #[test]
    fn set_session_without_enrollments_leaves_no_active_course() {
        let mut session = Session::new();
        session.set_session(
            teacher_identity(),
            AccessToken::new("access"),
            RefreshToken::new("refresh"),
            vec![],
        );

        assert_eq!(session.active_course(), None);
    }

    #[test]
    fn admin_never_gets_a_default_course() {
        let mut session = Session::new();
        session.set_session(
            Identity::new("1", "root", "Admin", Role::Admin),
            AccessToken::new("access"),
            RefreshToken::new("refresh"),
            vec![CourseRef::new(1, "Algorithms")],
        );

        assert_eq!(session.active_course(), None);
    }

    #[test]
    fn set_session_replaces_everything_atomically() {
        let mut session = Session::new();
        session.set_session(
            teacher_identity(),
            AccessToken::new("old-access"),
            RefreshToken::new("old-refresh"),
            vec![CourseRef::new(9, "Old Course")],
        );
        session.set_active_course(CourseId::new(9));

        session.set_session(
            Identity::new("8", "s1001", "Wen", Role::Student),
            AccessToken::new("new-access"),
            RefreshToken::new("new-refresh"),
            vec![CourseRef::new(3, "Networks")],
        );

        assert_eq!(session.identity().unwrap().uid, "s1001");
        assert_eq!(session.access_token().unwrap().as_str(), "new-access");
        assert_eq!(session.enrollments().len(), 1);
        assert_eq!(session.active_course(), Some(CourseId::new(3)));
    }

    #[test]
    fn clear_resets_every_field() {
        let mut session = Session::new();
        session.set_session(
            teacher_identity(),
            AccessToken::new("access"),
            RefreshToken::new("refresh"),
            vec![CourseRef::new(1, "Algorithms")],
        );

        session.clear();

        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert!(session.enrollments().is_empty());
        assert_eq!(session.active_course(), None);
    }

    #[test]
    fn set_active_course_does_not_validate_membership() {
        let mut session = Session::new();
        session.set_active_course(CourseId::new(99));
        assert_eq!(session.active_course(), Some(CourseId::new(99)));
    }
}
