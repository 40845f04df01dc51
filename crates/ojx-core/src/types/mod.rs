//! Core platform types.
//!
//! These types enforce their invariants at construction time,
//! keeping invalid states out of the session model.

mod course;
mod role;
mod server_url;
mod user;

pub use course::{CourseId, CourseRef};
pub use role::Role;
pub use server_url::ServerUrl;
pub use user::{Identity, UserId};
