use futures_core::future::BoxFuture;
use std::fmt;
use std::future::Future;

/// What a caller hands to [`AsyncTracker::run`](crate::AsyncTracker::run).
///
/// Any `Future<Output = Result<T, E>> + Send + 'static` converts into an
/// awaitable action. `NotAwaitable` stands for a caller that produced nothing
/// to wait on, typically a helper that forgot to return its future.
pub enum Action<T, E> {
    Awaitable(BoxFuture<'static, Result<T, E>>),
    NotAwaitable,
}

impl<T, E> Action<T, E> {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Action::Awaitable(Box::pin(future))
    }

    pub fn not_awaitable() -> Self {
        Action::NotAwaitable
    }

    /// `None` becomes [`Action::NotAwaitable`].
    pub fn from_option<F>(future: Option<F>) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        match future {
            Some(future) => Action::new(future),
            None => Action::NotAwaitable,
        }
    }

    pub fn is_awaitable(&self) -> bool {
        matches!(self, Action::Awaitable(_))
    }

    pub(crate) fn into_future(self) -> Option<BoxFuture<'static, Result<T, E>>> {
        match self {
            Action::Awaitable(future) => Some(future),
            Action::NotAwaitable => None,
        }
    }
}

impl<T, E, F> From<F> for Action<T, E>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
{
    fn from(future: F) -> Self {
        Action::new(future)
    }
}

impl<T, E> fmt::Debug for Action<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Awaitable(_) => f.write_str("Action::Awaitable(..)"),
            Action::NotAwaitable => f.write_str("Action::NotAwaitable"),
        }
    }
}
