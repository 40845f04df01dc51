//! Reactive-retry guard for API calls.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use ojx_core::error::AuthError;
use ojx_core::{AccessToken, Boundary, Error, Result, SessionStore};

use crate::auth::AuthClient;
use crate::client::ApiClient;
use crate::endpoints;

use super::{Attempt, renew_session};

/// Guard wrapping API calls with credential attachment and 401 recovery.
///
/// Every call walks the same sequence: attach the bearer token, attempt
/// the request, and on a 401 renew the token and re-issue the request
/// exactly once. 403 and 404 are terminal redirects; anything else passes
/// through to the caller unmodified.
#[derive(Debug, Clone)]
pub struct ApiGuard {
    client: ApiClient,
    auth: AuthClient,
    store: SessionStore,
}

impl ApiGuard {
    /// Create a guard over the given client and session store.
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        let auth = AuthClient::new(client.clone());
        Self {
            client,
            auth,
            store,
        }
    }

    /// Issue a guarded GET request.
    #[instrument(skip(self), fields(server = %self.client.server()))]
    pub async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.dispatch_get::<(), R>(path, None).await
    }

    /// Issue a guarded GET request with query parameters.
    #[instrument(skip(self, params), fields(server = %self.client.server()))]
    pub async fn get_with<Q, R>(&self, path: &str, params: &Q) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        self.dispatch_get(path, Some(params)).await
    }

    /// Issue a guarded POST request with a JSON body.
    #[instrument(skip(self, body), fields(server = %self.client.server()))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let mut attempt = Attempt::new();
        let mut token = self.authenticated_token()?;

        loop {
            let response = self
                .client
                .post_raw(path, Some(body), Some(token.as_str()))
                .await?;

            if response.status().is_success() {
                return self.client.read_json(response).await;
            }

            token = self.recover(path, response, &mut attempt).await?;
        }
    }

    async fn dispatch_get<Q, R>(&self, path: &str, params: Option<&Q>) -> Result<R>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let mut attempt = Attempt::new();
        let mut token = self.authenticated_token()?;

        loop {
            let response = self
                .client
                .get_raw(path, params, Some(token.as_str()))
                .await?;

            if response.status().is_success() {
                return self.client.read_json(response).await;
            }

            token = self.recover(path, response, &mut attempt).await?;
        }
    }

    /// A guarded action with no access token is never sent.
    fn authenticated_token(&self) -> Result<AccessToken> {
        self.store
            .access_token()
            .ok_or(Error::Redirect(Boundary::Login))
    }

    /// Decide how to proceed after a non-success response.
    ///
    /// Returns the token to retry with, or the terminal error for this
    /// action.
    async fn recover(
        &self,
        path: &str,
        response: reqwest::Response,
        attempt: &mut Attempt,
    ) -> Result<AccessToken> {
        let status = response.status();

        // The refresh endpoint is never itself retried; any failure there
        // ends the session.
        if path == endpoints::REFRESH {
            self.store.clear();
            return Err(Error::Redirect(Boundary::Login));
        }

        match status.as_u16() {
            401 if attempt.can_retry() => {
                debug!(path, "Access token rejected; refreshing");
                attempt.record_retry();
                renew_session(&self.auth, &self.store).await
            }
            // Already retried once with a fresh token; surface the failure.
            401 => Err(AuthError::SessionExpired.into()),
            403 => Err(Error::Redirect(Boundary::Forbidden)),
            404 => Err(Error::Redirect(Boundary::NotFound)),
            _ => Err(self.client.error_from(response).await.into()),
        }
    }
}
