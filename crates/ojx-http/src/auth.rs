//! Authentication operations against the platform.

use tracing::{debug, info, instrument, warn};

use ojx_core::error::AuthError;
use ojx_core::types::CourseRef;
use ojx_core::{AccessToken, Credentials, Error, Identity, RefreshToken, Result, SessionStore};

use crate::client::ApiClient;
use crate::endpoints::{self, LoginRequest, LoginResponse, RefreshResponse};

/// Client for the platform's auth endpoints.
///
/// Operations mutate the [`SessionStore`] they are given. The store is the
/// single source of outbound credentials, so storing a renewed token here
/// also updates every request sent after it.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: ApiClient,
}

impl AuthClient {
    /// Create an auth client over the given API client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticate and populate the session store.
    ///
    /// On success the store holds the identity, both tokens, the
    /// enrollments, and the defaulted active course.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the server rejects
    /// the login; transport and other API errors pass through.
    #[instrument(
        skip(self, store, credentials),
        fields(server = %self.client.server(), uid = %credentials.uid())
    )]
    pub async fn login(&self, store: &SessionStore, credentials: &Credentials) -> Result<Identity> {
        info!("Creating new session");

        let request = LoginRequest {
            uid: credentials.uid(),
            password: credentials.password(),
            role: credentials.role(),
        };

        let response: LoginResponse = match self.client.post_json(endpoints::LOGIN, &request).await
        {
            Ok(response) => response,
            Err(Error::Api(err)) if err.status == 401 => {
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(err) => return Err(err),
        };

        let identity = Identity::new(
            response.user.id,
            response.user.uid,
            response.user.username,
            response.user.role,
        );
        let enrollments = response
            .user
            .courses
            .into_iter()
            .map(|course| CourseRef::new(course.id, course.name))
            .collect();

        store.set_session(
            identity.clone(),
            AccessToken::new(response.access_token),
            RefreshToken::new(response.refresh_token),
            enrollments,
        );

        debug!(uid = %identity.uid, "Session created successfully");
        Ok(identity)
    }

    /// Renew the access token using the stored refresh token.
    ///
    /// On success the new token is stored and returned. Failures are
    /// propagated unchanged; the policy of clearing the session and
    /// redirecting belongs to the guards.
    #[instrument(skip(self, store), fields(server = %self.client.server()))]
    pub async fn refresh(&self, store: &SessionStore) -> Result<AccessToken> {
        info!("Refreshing access token");

        let refresh_token = store
            .refresh_token()
            .ok_or(AuthError::RefreshTokenInvalid)?;

        let response: RefreshResponse = self
            .client
            .post_authed_no_body(endpoints::REFRESH, refresh_token.as_str())
            .await?;

        let token = AccessToken::new(response.access_token);
        store.set_access_token(token.clone());

        debug!("Access token renewed");
        Ok(token)
    }

    /// Probe whether an access token is still accepted by the server.
    #[instrument(skip(self, token), fields(server = %self.client.server()))]
    pub async fn check_token(&self, token: &AccessToken) -> Result<()> {
        self.client
            .get_authed_empty(endpoints::CHECK_TOKEN, token.as_str())
            .await
    }

    /// Log out: best-effort remote invalidation, then always clear locally.
    ///
    /// The remote call's outcome never reaches the caller; a failure is
    /// logged and superseded by the local clear.
    #[instrument(skip(self, store), fields(server = %self.client.server()))]
    pub async fn logout(&self, store: &SessionStore) {
        if let Some(token) = store.access_token() {
            if let Err(err) = self
                .client
                .post_authed_empty(endpoints::LOGOUT, token.as_str())
                .await
            {
                warn!(error = %err, "Remote logout failed; clearing local session anyway");
            }
        }

        store.clear();
    }
}
