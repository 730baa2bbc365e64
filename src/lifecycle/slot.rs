//! Observable request slot.

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use super::intent::LoadIntent;
use super::reducer::{LoadReducer, Reducer};
use super::state::LoadState;

/// What a trigger does when the slot is already loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerPolicy {
    /// Drop the new trigger; the in-flight call keeps the slot.
    #[default]
    IgnoreWhileLoading,
    /// Start the new call; whatever the older call returns is discarded.
    Supersede,
}

/// How a single trigger ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The slot now holds `Success`.
    Succeeded,
    /// The slot now holds `Error`.
    Failed,
    /// The slot was loading and the call was never made.
    Busy,
    /// The call finished after a reset or a newer trigger; its result was dropped.
    Discarded,
}

impl TriggerOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// One request lifecycle, shared by cheap clones.
///
/// State is held in a `watch` channel: every subscriber sees the current
/// state immediately and every later change. Each trigger takes a new
/// generation number and its result is applied only while that generation
/// is still current, so results that arrive after [`reset`](Self::reset)
/// or after a superseding trigger never reach subscribers.
pub struct Lifecycle<T> {
    inner: Arc<LifecycleInner<T>>,
}

struct LifecycleInner<T> {
    name: &'static str,
    policy: TriggerPolicy,
    generation: AtomicU64,
    state: watch::Sender<LoadState<T>>,
}

impl<T> Clone for Lifecycle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Lifecycle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("name", &self.inner.name)
            .field("policy", &self.inner.policy)
            .field("state", &self.inner.state.borrow().label())
            .finish()
    }
}

impl<T> Lifecycle<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    /// Idle slot that ignores triggers while loading.
    pub fn new(name: &'static str) -> Self {
        Self::with_policy(name, TriggerPolicy::default())
    }

    pub fn with_policy(name: &'static str, policy: TriggerPolicy) -> Self {
        Self {
            inner: Arc::new(LifecycleInner {
                name,
                policy,
                generation: AtomicU64::new(0),
                state: watch::Sender::new(LoadState::Idle),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    pub fn policy(&self) -> TriggerPolicy {
        self.inner.policy
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState<T> {
        self.inner.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().is_loading()
    }

    /// Receiver that replays the current state and sees every change.
    pub fn subscribe(&self) -> watch::Receiver<LoadState<T>> {
        self.inner.state.subscribe()
    }

    /// Run `call` through the lifecycle.
    ///
    /// The call future is only polled if the slot accepts the trigger. On
    /// completion the slot becomes `Success` or `Error(err.to_string())`.
    pub async fn trigger<F, E>(&self, call: F) -> TriggerOutcome
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.run(call, false, None::<fn(&T)>).await
    }

    /// Like [`trigger`](Self::trigger), then hand the published payload to
    /// `on_success`.
    ///
    /// The hook sees the value this call produced, not whatever the slot
    /// holds by the time the caller resumes. It is skipped on failure and
    /// when the result was discarded.
    pub async fn trigger_then<F, E>(&self, call: F, on_success: impl FnOnce(&T)) -> TriggerOutcome
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.run(call, false, Some(on_success)).await
    }

    /// Start `call` even if the slot is loading, whatever its policy.
    ///
    /// An in-flight call is superseded and its result discarded. Used to
    /// reload a slot after a mutation, where the older response may predate
    /// the change.
    pub async fn refresh<F, E>(&self, call: F) -> TriggerOutcome
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.run(call, true, None::<fn(&T)>).await
    }

    /// [`refresh`](Self::refresh) with a success hook, see
    /// [`trigger_then`](Self::trigger_then).
    pub async fn refresh_then<F, E>(&self, call: F, on_success: impl FnOnce(&T)) -> TriggerOutcome
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.run(call, true, Some(on_success)).await
    }

    async fn run<F, E, H>(&self, call: F, force: bool, on_success: Option<H>) -> TriggerOutcome
    where
        F: Future<Output = Result<T, E>>,
        E: fmt::Display,
        H: FnOnce(&T),
    {
        let Some(generation) = self.begin(force) else {
            tracing::debug!(slot = self.inner.name, "Trigger ignored, request in flight");
            return TriggerOutcome::Busy;
        };
        tracing::debug!(slot = self.inner.name, generation, force, "Request started");

        // Dropping this future mid-call must not leave the slot stuck in Loading.
        let mut pending = scopeguard::guard(true, |pending| {
            if pending {
                self.abandon(generation);
            }
        });

        let result = call.await;
        *pending = false;

        let mut published = None;
        let (intent, outcome) = match result {
            Ok(value) => {
                if on_success.is_some() {
                    published = Some(value.clone());
                }
                (LoadIntent::Succeeded(value), TriggerOutcome::Succeeded)
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(slot = self.inner.name, error = %message, "Request failed");
                (LoadIntent::Failed(message), TriggerOutcome::Failed)
            }
        };

        if !self.finish(generation, intent) {
            tracing::debug!(slot = self.inner.name, generation, "Stale result discarded");
            return TriggerOutcome::Discarded;
        }
        if let (Some(hook), Some(value)) = (on_success, published) {
            hook(&value);
        }
        outcome
    }

    /// Force the slot back to `Idle` and invalidate any in-flight call.
    pub fn reset(&self) {
        let inner = &self.inner;
        inner.generation.fetch_add(1, Ordering::SeqCst);
        inner.state.send_if_modified(|state| {
            if state.is_idle() {
                return false;
            }
            let previous = std::mem::take(state);
            *state = LoadReducer::<T>::reduce(previous, LoadIntent::Reset);
            true
        });
    }

    /// Edit a `Success` payload in place. Returns false in any other state.
    pub fn patch(&self, edit: impl FnOnce(&mut T)) -> bool {
        self.inner.state.send_if_modified(|state| match state {
            LoadState::Success(value) => {
                edit(value);
                true
            }
            _ => false,
        })
    }

    fn begin(&self, force: bool) -> Option<u64> {
        let inner = &self.inner;
        let mut started = None;
        inner.state.send_if_modified(|state| {
            let was_loading = state.is_loading();
            if was_loading && !force && inner.policy == TriggerPolicy::IgnoreWhileLoading {
                return false;
            }
            started = Some(inner.generation.fetch_add(1, Ordering::SeqCst) + 1);
            let previous = std::mem::take(state);
            *state = LoadReducer::<T>::reduce(previous, LoadIntent::Start);
            !was_loading
        });
        started
    }

    fn finish(&self, generation: u64, intent: LoadIntent<T>) -> bool {
        let inner = &self.inner;
        inner.state.send_if_modified(|state| {
            if inner.generation.load(Ordering::SeqCst) != generation || !state.is_loading() {
                return false;
            }
            let previous = std::mem::take(state);
            *state = LoadReducer::<T>::reduce(previous, intent);
            true
        })
    }

    fn abandon(&self, generation: u64) {
        if self.finish(generation, LoadIntent::Reset) {
            tracing::debug!(slot = self.inner.name, generation, "In-flight request dropped");
        }
    }
}
