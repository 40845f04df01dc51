//! Auth endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use ojx_core::Role;

// ============================================================================
// Endpoint Paths
// ============================================================================

/// Authentication exchange.
pub const LOGIN: &str = "/api/auth/login";

/// Access-token renewal; takes the refresh token as a bearer header.
pub const REFRESH: &str = "/api/auth/refresh";

/// Access-token validity probe, used by the eager route guard.
pub const CHECK_TOKEN: &str = "/api/auth/check_token";

/// Remote session invalidation.
pub const LOGOUT: &str = "/api/auth/logout";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub uid: &'a str,
    pub password: &'a str,
    pub role: Role,
}

/// Response from login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserPayload,
}

/// User description returned by the login exchange.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub id: String,
    pub uid: String,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub courses: Vec<CoursePayload>,
}

/// A course the user is associated with.
#[derive(Debug, Deserialize)]
pub struct CoursePayload {
    pub id: i64,
    pub name: String,
}

/// Response from the refresh endpoint.
/// Note: only the access token is renewed; the refresh token is not rotated.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}
