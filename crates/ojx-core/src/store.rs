//! Shared session store.

use std::sync::{Arc, RwLock};

use crate::session::Session;
use crate::tokens::{AccessToken, RefreshToken};
use crate::types::{CourseId, CourseRef, Identity, Role};

/// Shared handle to the client session.
///
/// The store is the single context object passed to the HTTP client and
/// both guards - there is no ambient global. Clones are cheap (internal
/// `Arc`) and all observe the same session. Reads return snapshots; when
/// concurrent guarded actions both renew the token, the last writer wins.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
}

impl SessionStore {
    /// Create a store holding an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing session (e.g. one restored from disk).
    pub fn from_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    /// Replace the entire session after a successful authentication exchange.
    ///
    /// See [`Session::set_session`] for the active-course default rule.
    pub fn set_session(
        &self,
        identity: Identity,
        access_token: AccessToken,
        refresh_token: RefreshToken,
        enrollments: Vec<CourseRef>,
    ) {
        let mut session = self.inner.write().unwrap();
        session.set_session(identity, access_token, refresh_token, enrollments);
    }

    /// Select the active course. Membership is not validated here.
    pub fn set_active_course(&self, course: CourseId) {
        self.inner.write().unwrap().set_active_course(course);
    }

    /// Swap in a renewed access token.
    pub fn set_access_token(&self, token: AccessToken) {
        self.inner.write().unwrap().set_access_token(token);
    }

    /// Reset the session to empty.
    pub fn clear(&self) {
        self.inner.write().unwrap().clear();
    }

    /// Returns true when an access token is present.
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().is_authenticated()
    }

    /// Returns a snapshot of the authenticated identity, if any.
    pub fn identity(&self) -> Option<Identity> {
        self.inner.read().unwrap().identity().cloned()
    }

    /// Returns the authenticated role, if any.
    pub fn role(&self) -> Option<Role> {
        self.inner.read().unwrap().role()
    }

    /// Returns a snapshot of the current access token, if any.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.inner.read().unwrap().access_token().cloned()
    }

    /// Returns a snapshot of the current refresh token, if any.
    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.inner.read().unwrap().refresh_token().cloned()
    }

    /// Returns a snapshot of the course enrollments.
    pub fn enrollments(&self) -> Vec<CourseRef> {
        self.inner.read().unwrap().enrollments().to_vec()
    }

    /// Returns the currently selected course, if any.
    pub fn active_course(&self) -> Option<CourseId> {
        self.inner.read().unwrap().active_course()
    }

    /// Returns a full snapshot of the session, for persistence.
    pub fn snapshot(&self) -> Session {
        self.inner.read().unwrap().clone()
    }
}

// Custom Debug impl that hides token material
impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let session = self.inner.read().unwrap();
        f.debug_struct("SessionStore")
            .field("identity", &session.identity())
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_store() -> SessionStore {
        let store = SessionStore::new();
        store.set_session(
            Identity::new("8", "s1001", "Wen", Role::Student),
            AccessToken::new("access"),
            RefreshToken::new("refresh"),
            vec![CourseRef::new(4, "Operating Systems")],
        );
        store
    }

    #[test]
    fn clones_share_the_same_session() {
        let store = populated_store();
        let other = store.clone();

        other.set_access_token(AccessToken::new("renewed"));

        assert_eq!(store.access_token().unwrap().as_str(), "renewed");
    }

    #[test]
    fn token_renewal_is_last_writer_wins() {
        let store = populated_store();

        store.set_access_token(AccessToken::new("first"));
        store.set_access_token(AccessToken::new("second"));

        assert_eq!(store.access_token().unwrap().as_str(), "second");
        // Refresh token is untouched by access-token renewal
        assert_eq!(store.refresh_token().unwrap().as_str(), "refresh");
    }

    #[test]
    fn clear_empties_the_shared_session() {
        let store = populated_store();
        store.clear();

        assert!(!store.is_authenticated());
        assert!(store.identity().is_none());
        assert!(store.enrollments().is_empty());
    }

    #[test]
    fn debug_output_redacts_tokens() {
        let store = populated_store();
        let debug = format!("{:?}", store);
        assert!(!debug.contains("access"));
        assert!(!debug.contains("refresh"));
        assert!(debug.contains("[REDACTED]"));
    }
}
