//! Request lifecycle primitives.
//!
//! Every remote call a container makes lives in a [`Lifecycle`] slot whose
//! state is one of `Idle`, `Loading`, `Success(payload)` or `Error(message)`.
//!
//! # Architecture
//!
//! ```text
//! trigger ──→ LoadIntent ──→ LoadReducer ──→ LoadState ──→ subscribers
//!    ↑                                                         │
//!    └──────────────────── retry / reset ──────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot published through a `watch` channel
//! - **Intent**: what happened (start, success, failure, reset)
//! - **Reducer**: pure function that computes the next state

mod intent;
mod reducer;
mod slot;
mod state;

pub use intent::{Intent, LoadIntent};
pub use reducer::{LoadReducer, Reducer};
pub use slot::{Lifecycle, TriggerOutcome, TriggerPolicy};
pub use state::{LoadState, UiState};
