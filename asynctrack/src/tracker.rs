use crate::{Action, OperationState, PendingData, Scope, Status, TrackerConfig, TrackerError};
use futures_signals::signal::{Mutable, MutableSignalCloned, SignalExt, SignalStream};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Tracks one asynchronous operation at a time and projects it as an
/// [`OperationState`].
///
/// Every write goes through the same check: the owning [`Scope`] must still be
/// live and the write must belong to the most recently started operation.
/// Starting a new operation, or calling `set_data`, `set_error` or `reset`,
/// makes any operation still in flight stale. Stale and post-teardown writes
/// are dropped without a trace.
///
/// Clones share the same state.
pub struct AsyncTracker<T, E> {
    state: Mutable<OperationState<T, E>>,
    generation: Arc<AtomicU64>,
    scope: Scope,
    config: TrackerConfig,
}

impl<T, E> Clone for AsyncTracker<T, E> {
    fn clone(&self) -> Self {
        AsyncTracker {
            state: self.state.clone(),
            generation: self.generation.clone(),
            scope: self.scope.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T, E> AsyncTracker<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub fn new(scope: &Scope) -> Self {
        Self::with_state(scope, OperationState::idle())
    }

    pub fn with_state(scope: &Scope, initial_state: OperationState<T, E>) -> Self {
        Self::with_config(scope, initial_state, TrackerConfig::default())
    }

    pub fn with_config(
        scope: &Scope,
        initial_state: OperationState<T, E>,
        config: TrackerConfig,
    ) -> Self {
        AsyncTracker {
            state: Mutable::new(initial_state),
            generation: Arc::new(AtomicU64::new(0)),
            scope: scope.clone(),
            config,
        }
    }

    /// Starts tracking `action` and returns a handle to its outcome.
    ///
    /// The state is `Pending` by the time this returns. The action is spawned
    /// on the current tokio runtime and runs to completion even if it goes
    /// stale; the handle always yields its outcome unchanged, after the
    /// settlement has been committed (or dropped).
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime. The state is left as it
    /// was.
    pub fn run<A>(&self, action: A) -> Result<RunHandle<T, E>, TrackerError>
    where
        A: Into<Action<T, E>>,
    {
        let future = action
            .into()
            .into_future()
            .ok_or(TrackerError::InvalidArgument)?;

        let runtime = Handle::current();
        let generation = self.begin();
        let committer = self.clone();
        let task = runtime.spawn(async move {
            let outcome = future.await;
            committer.commit(generation, OperationState::settle(outcome.clone()));
            outcome
        });

        Ok(RunHandle { task })
    }

    pub fn set_data(&self, data: T) {
        self.replace(OperationState::resolved(data));
    }

    pub fn set_error(&self, error: E) {
        self.replace(OperationState::rejected(error));
    }

    pub fn reset(&self) {
        self.replace(OperationState::idle());
    }

    pub fn state(&self) -> OperationState<T, E> {
        self.state.get_cloned()
    }

    pub fn status(&self) -> Status {
        self.state.lock_ref().status
    }

    pub fn data(&self) -> Option<T> {
        self.state.lock_ref().data.clone()
    }

    pub fn error(&self) -> Option<E> {
        self.state.lock_ref().error.clone()
    }

    pub fn is_idle(&self) -> bool {
        self.status().is_idle()
    }

    pub fn is_loading(&self) -> bool {
        self.status().is_loading()
    }

    pub fn is_error(&self) -> bool {
        self.status().is_error()
    }

    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// False once the owning scope has ended.
    pub fn is_live(&self) -> bool {
        self.scope.is_live()
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn to_signal(&self) -> MutableSignalCloned<OperationState<T, E>> {
        self.state.signal_cloned()
    }

    pub fn to_stream(&self) -> SignalStream<MutableSignalCloned<OperationState<T, E>>> {
        self.state.signal_cloned().to_stream()
    }

    /// Moves to `Pending` and returns the generation of the new operation.
    fn begin(&self) -> u64 {
        let mut state = self.state.lock_mut();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if self.scope.is_live() {
            let data = match self.config.pending_data {
                PendingData::Clear => None,
                PendingData::Retain => state.data.clone(),
            };
            *state = OperationState::pending(data);
        }
        generation
    }

    /// Writes a settlement if its operation is still the current one.
    fn commit(&self, generation: u64, next: OperationState<T, E>) -> bool {
        let mut state = self.state.lock_mut();
        if !self.scope.is_live() || self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        *state = next;
        true
    }

    /// Direct write that supersedes whatever is in flight.
    fn replace(&self, next: OperationState<T, E>) {
        let mut state = self.state.lock_mut();
        if !self.scope.is_live() {
            return;
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        *state = next;
    }
}

/// Outcome of a [`AsyncTracker::run`] call.
///
/// Resolves to exactly what the action produced. Dropping the handle does not
/// stop the action or its state update.
///
/// # Panics
///
/// Polling panics if the action panicked, with the action's own payload. It
/// also panics if the runtime shut down before the action settled.
#[derive(Debug)]
pub struct RunHandle<T, E> {
    task: JoinHandle<Result<T, E>>,
}

impl<T, E> RunHandle<T, E> {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl<T, E> Future for RunHandle<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.task).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            // A panicking action panics whoever awaits it.
            Poll::Ready(Err(join_error)) if join_error.is_panic() => {
                std::panic::resume_unwind(join_error.into_panic())
            }
            // Runtime shut down with the action still in flight.
            Poll::Ready(Err(join_error)) => {
                panic!("tracked operation never settled: {join_error}")
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
