//! Error types for the ojx client toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, API response and input validation errors,
//! plus the redirect outcome produced by the guards.

use std::fmt;
use thiserror::Error;

use crate::routes::Boundary;

/// The unified error type for ojx operations.
///
/// This error type covers all possible failure modes in the toolkit,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (invalid credentials, expired session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// API errors (non-2xx responses with a server-provided message).
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (invalid server URL, unknown role).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A guard rejected the action and redirected to a client boundary.
    #[error("redirected to {0} boundary")]
    Redirect(Boundary),
}

impl Error {
    /// Returns the boundary this error redirects to, if any.
    pub fn boundary(&self) -> Option<Boundary> {
        match self {
            Error::Redirect(boundary) => Some(*boundary),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid credentials provided at login.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The access token was rejected again after a successful refresh.
    #[error("session expired")]
    SessionExpired,

    /// Refresh was attempted without a refresh token.
    #[error("refresh token invalid")]
    RefreshTokenInvalid,
}

/// An error response from the platform API.
///
/// The backend reports failures as JSON bodies of the form
/// `{"error": "<message>"}` alongside the HTTP status code.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server, if the body could be parsed.
    pub message: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid server URL format.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// Unknown role tag.
    #[error("unknown role '{value}'")]
    Role { value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_message() {
        let err = ApiError::new(401, Some("token expired".to_string()));
        assert_eq!(err.to_string(), "HTTP 401: token expired");

        let bare = ApiError::new(500, None);
        assert_eq!(bare.to_string(), "HTTP 500");
    }

    #[test]
    fn redirect_error_names_boundary() {
        let err = Error::Redirect(Boundary::Forbidden);
        assert_eq!(err.to_string(), "redirected to forbidden boundary");
        assert_eq!(err.boundary(), Some(Boundary::Forbidden));
    }
}
