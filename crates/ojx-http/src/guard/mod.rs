//! Request and navigation guards.
//!
//! Two named strategies coordinate token renewal with outgoing actions,
//! matching the two kinds of guarded action in the client:
//!
//! - [`ApiGuard`] is reactive: it attaches the access token, sends the
//!   request, and reacts to a 401 with a single refresh-and-retry.
//! - [`RouteGuard`] is eager: before a protected entry point runs, it
//!   probes token validity and renews up front.
//!
//! The strategies are deliberately kept separate; their observable
//! behavior differs (one calls the check endpoint, one waits for a 401).
//! Both end the same way when renewal fails: the session is cleared and
//! the caller lands at the login boundary.

mod api;
mod route;

pub use api::ApiGuard;
pub use route::RouteGuard;

use tracing::warn;

use ojx_core::{AccessToken, Boundary, Error, Result, SessionStore};

use crate::auth::AuthClient;

/// Retry budget carried alongside one guarded request.
///
/// A request may be re-issued at most once after a refresh. The budget is
/// an explicit value owned by the guard, not a flag smuggled onto the
/// request object.
#[derive(Debug, Default)]
struct Attempt {
    retried: bool,
}

impl Attempt {
    fn new() -> Self {
        Self::default()
    }

    fn can_retry(&self) -> bool {
        !self.retried
    }

    fn record_retry(&mut self) {
        self.retried = true;
    }
}

/// Renew the access token, clearing the session on failure.
///
/// Renewal failure is terminal for the current action: the session is
/// cleared, no further retries happen, and the caller is redirected to
/// the login boundary.
async fn renew_session(auth: &AuthClient, store: &SessionStore) -> Result<AccessToken> {
    match auth.refresh(store).await {
        Ok(token) => Ok(token),
        Err(err) => {
            warn!(error = %err, "Token refresh failed; clearing session");
            store.clear();
            Err(Error::Redirect(Boundary::Login))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_budget_allows_exactly_one_retry() {
        let mut attempt = Attempt::new();
        assert!(attempt.can_retry());
        attempt.record_retry();
        assert!(!attempt.can_retry());
    }
}
