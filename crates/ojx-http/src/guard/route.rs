//! Eager-probe guard for protected entry points.

use tracing::{debug, instrument};

use ojx_core::{Boundary, Error, Result, RouteRequirements, SessionStore};

use crate::auth::AuthClient;

use super::renew_session;

/// Guard run before entering a protected route.
///
/// Unlike [`ApiGuard`](super::ApiGuard), which waits for a 401, this
/// strategy probes the check endpoint up front and renews the token
/// before the entry point runs at all. Role requirements are evaluated
/// only once authentication is confirmed.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    auth: AuthClient,
    store: SessionStore,
}

impl RouteGuard {
    /// Create a guard over the given auth client and session store.
    pub fn new(auth: AuthClient, store: SessionStore) -> Self {
        Self { auth, store }
    }

    /// Authorize entry against the route's requirements.
    ///
    /// Returns `Ok(())` when entry may proceed, possibly after a
    /// successful token renewal. Rejection reports the redirect boundary
    /// through [`Error::Redirect`].
    #[instrument(skip(self))]
    pub async fn authorize(&self, requirements: &RouteRequirements) -> Result<()> {
        if !requirements.requires_auth {
            return Ok(());
        }

        if self.token_expired().await {
            if self.store.refresh_token().is_none() {
                self.store.clear();
                return Err(Error::Redirect(Boundary::Login));
            }
            renew_session(&self.auth, &self.store).await?;
        }

        // Role checks run only after authentication is confirmed; failing
        // one leaves the token state untouched.
        if !requirements.permits(self.store.role()) {
            return Err(Error::Redirect(Boundary::Forbidden));
        }

        Ok(())
    }

    /// Probe the check endpoint; any failure counts as expired.
    async fn token_expired(&self) -> bool {
        let Some(token) = self.store.access_token() else {
            return true;
        };

        match self.auth.check_token(&token).await {
            Ok(()) => false,
            Err(err) => {
                debug!(error = %err, "Token check failed; treating as expired");
                true
            }
        }
    }
}
