//! Intents driving lifecycle transitions.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (trigger, retry, reset)
/// - System events (API responses)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}

/// Events in the life of one remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadIntent<T> {
    /// A call was issued.
    Start,
    /// The call returned a decoded payload.
    Succeeded(T),
    /// The call failed; carries the user-visible message.
    Failed(String),
    /// Back to idle regardless of the current state.
    Reset,
}

impl<T: Send + 'static> Intent for LoadIntent<T> {}
