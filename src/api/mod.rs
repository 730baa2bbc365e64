//! Client for the remote REST API.
//!
//! One method per backend operation, grouped by resource. Every
//! authenticated method resolves the bearer token from the injected
//! [`SessionStore`](crate::session::SessionStore) first.

mod auth;
mod client;
mod connections;
mod error;
mod matches;
mod messages;
mod posts;
mod projects;
mod users;

pub use client::ApiClient;
pub use error::{ApiError, ErrorKind, NETWORK_FALLBACK_MESSAGE};
pub use posts::media_mime;
