//! Plain-text renderers for lifecycle slots.
//!
//! Screens only read state. Every renderer takes a snapshot and returns the
//! text to print; none of them triggers a request.

mod chat;
mod discovery;
mod feed;
mod network;
mod profile;

pub use chat::{render_conversations, render_thread, render_users};
pub use discovery::render_matches;
pub use feed::{render_comments, render_feed, render_interactions, render_post};
pub use network::{render_connections, render_projects, render_support_check};
pub use profile::render_profile;

use crate::lifecycle::LoadState;

pub const LOADING_TEXT: &str = "Loading...";
pub const RETRY_HINT: &str = "Run the command again to retry.";

/// Error text followed by the retry hint.
pub fn render_error(message: &str) -> String {
    format!("Error: {}\n{}", message, RETRY_HINT)
}

/// Render any slot: `idle` text, a loading line, the error with its retry
/// hint, or `success` applied to the payload.
pub fn render_state<T>(
    state: &LoadState<T>,
    idle: &str,
    success: impl FnOnce(&T) -> String,
) -> String {
    match state {
        LoadState::Idle => idle.to_string(),
        LoadState::Loading => LOADING_TEXT.to_string(),
        LoadState::Success(value) => success(value),
        LoadState::Error(message) => render_error(message),
    }
}

/// `"1 like"`, `"3 likes"`.
pub(crate) fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
