//! HTTP client for platform API requests.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use ojx_core::error::{ApiError, TransportError};
use ojx_core::{Error, Result, ServerUrl};

/// Error body shape used by the platform API.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: Option<String>,
}

/// HTTP client for the platform API.
///
/// Wraps a shared `reqwest::Client` pointed at one server. This type only
/// moves bytes; credential policy lives in [`AuthClient`](crate::AuthClient)
/// and the guards.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    server: ServerUrl,
}

impl ApiClient {
    /// Create a new API client for the given server.
    pub fn new(server: ServerUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("ojx/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, server }
    }

    /// Returns the server URL this client is configured for.
    pub fn server(&self) -> &ServerUrl {
        &self.server
    }

    /// GET returning the raw response; the guard inspects the status itself.
    pub(crate) async fn get_raw<Q>(
        &self,
        path: &str,
        params: Option<&Q>,
        token: Option<&str>,
    ) -> Result<reqwest::Response>
    where
        Q: Serialize + std::fmt::Debug,
    {
        let url = self.server.endpoint(path);
        debug!(path, "API GET");
        if let Some(params) = params {
            trace!(?params, "query parameters");
        }

        let mut request = self.client.get(&url);
        if let Some(params) = params {
            request = request.query(params);
        }
        if let Some(token) = token {
            request = request.headers(self.auth_headers(token));
        }

        request.send().await.map_err(transport_error)
    }

    /// POST returning the raw response; the guard inspects the status itself.
    pub(crate) async fn post_raw<B>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<reqwest::Response>
    where
        B: Serialize + std::fmt::Debug,
    {
        let url = self.server.endpoint(path);
        debug!(path, "API POST");

        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = token {
            request = request.headers(self.auth_headers(token));
        }

        request.send().await.map_err(transport_error)
    }

    /// Make an unauthenticated POST expecting a JSON response.
    #[instrument(skip(self, body), fields(server = %self.server))]
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let response = self.post_raw(path, Some(body), None).await?;
        self.handle_response(response).await
    }

    /// Make an authenticated POST with no request body.
    /// Used for endpoints like the token refresh that take only a header.
    #[instrument(skip(self, token), fields(server = %self.server))]
    pub async fn post_authed_no_body<R>(&self, path: &str, token: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.server.endpoint(path);
        debug!(path, "API POST (no body)");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Make an authenticated POST whose response body is ignored.
    #[instrument(skip(self, token), fields(server = %self.server))]
    pub async fn post_authed_empty(&self, path: &str, token: &str) -> Result<()> {
        let response = self.post_raw::<()>(path, None, Some(token)).await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from(response).await.into())
        }
    }

    /// Make an authenticated GET whose response body is ignored.
    #[instrument(skip(self, token), fields(server = %self.server))]
    pub async fn get_authed_empty(&self, path: &str, token: &str) -> Result<()> {
        let response = self.get_raw::<()>(path, None, Some(token)).await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from(response).await.into())
        }
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Handle an API response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(&self, response: reqwest::Response) -> Result<R> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            self.read_json(response).await
        } else {
            Err(self.error_from(response).await.into())
        }
    }

    /// Parse the JSON body of a response already known to be successful.
    pub(crate) async fn read_json<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R> {
        response.json::<R>().await.map_err(transport_error)
    }

    /// Parse an error response body into a structured API error.
    pub(crate) async fn error_from(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        // Try to parse the platform's error format
        match response.json::<ApiErrorResponse>().await {
            Ok(error_body) => ApiError::new(status, error_body.error),
            Err(_) => ApiError::new(status, None),
        }
    }
}

/// Map a reqwest failure into the crate's transport taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let server = ServerUrl::new("https://oj.example.edu").unwrap();
        let client = ApiClient::new(server.clone());
        assert_eq!(client.server().as_str(), server.as_str());
    }
}
