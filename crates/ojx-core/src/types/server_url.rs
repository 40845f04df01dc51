//! Platform server URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated platform server base URL.
///
/// Server URLs must use HTTPS; plain HTTP is accepted only for localhost,
/// which local development and the mock-server test suite rely on.
///
/// # Example
///
/// ```
/// use ojx_core::ServerUrl;
///
/// let server = ServerUrl::new("https://oj.example.edu").unwrap();
/// assert_eq!(
///     server.endpoint("/api/auth/refresh"),
///     "https://oj.example.edu/api/auth/refresh"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServerUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full URL for an API path.
    ///
    /// Paths are expected to start with `/`, matching the endpoint
    /// constants in `ojx-http`.
    pub fn endpoint(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so strip it before joining
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();

        // Must be HTTPS (or HTTP for localhost)
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must use https (http is allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServerUrl {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServerUrl {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ServerUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_urls() {
        let server = ServerUrl::new("https://oj.example.edu").unwrap();
        assert_eq!(server.host(), Some("oj.example.edu"));
    }

    #[test]
    fn accepts_http_for_localhost_only() {
        assert!(ServerUrl::new("http://127.0.0.1:5000").is_ok());
        assert!(ServerUrl::new("http://localhost:5000").is_ok());
        assert!(ServerUrl::new("http://oj.example.edu").is_err());
    }

    #[test]
    fn rejects_non_url_input() {
        assert!(ServerUrl::new("not a url").is_err());
        assert!(ServerUrl::new("ftp://oj.example.edu").is_err());
    }

    #[test]
    fn endpoint_join_handles_trailing_slash() {
        let plain = ServerUrl::new("https://oj.example.edu").unwrap();
        let slashed = ServerUrl::new("https://oj.example.edu/").unwrap();
        assert_eq!(
            plain.endpoint("/api/auth/logout"),
            "https://oj.example.edu/api/auth/logout"
        );
        assert_eq!(plain.endpoint("/api/auth/logout"), slashed.endpoint("/api/auth/logout"));
    }
}
