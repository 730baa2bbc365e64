//! Persisted, observable session.
//!
//! The session (auth token, user id, user type) is the only state shared
//! between containers. It is injected into the API client and every
//! container at construction; writes are persisted first and then pushed
//! to all current subscribers.

mod backend;
mod secret;
mod store;

pub use backend::{FileSessionBackend, MemorySessionBackend, SessionBackend, SessionError};
pub use secret::SecureString;
pub use store::{Session, SessionStore};
