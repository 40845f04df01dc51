//! ojx-core - Core session, credential and routing types.
//!
//! This crate holds the client-side state model for the platform: who the
//! user is, which tokens they hold, which courses they can see, and which
//! boundaries a guarded action may be redirected to. It contains no network
//! code; the HTTP surface lives in `ojx-http`.

pub mod credentials;
pub mod error;
pub mod routes;
pub mod session;
pub mod store;
pub mod tokens;
pub mod types;

pub use credentials::Credentials;
pub use error::Error;
pub use routes::{Boundary, RouteRequirements};
pub use session::Session;
pub use store::SessionStore;
pub use tokens::{AccessToken, RefreshToken};
pub use types::{CourseId, CourseRef, Identity, Role, ServerUrl, UserId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
