//! ojx-http - HTTP client and guards for the platform API.
//!
//! This crate provides the network half of the toolkit: a thin
//! [`ApiClient`] over reqwest, the [`AuthClient`] bindings for the auth
//! endpoints, and the two guard strategies that coordinate token renewal
//! with outgoing actions ([`ApiGuard`] and [`RouteGuard`]).

mod auth;
mod client;
mod endpoints;
mod guard;

pub use auth::AuthClient;
pub use client::ApiClient;
pub use guard::{ApiGuard, RouteGuard};
