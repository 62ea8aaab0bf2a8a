use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// A future settled by hand through its paired [`Settle`].
///
/// Lets a test hold an operation open, assert on the pending state, and then
/// decide exactly when and how it settles. If the [`Settle`] half is dropped
/// without settling, the future stays pending forever.
#[derive(Debug)]
pub struct Deferred<T, E> {
    rx: oneshot::Receiver<Result<T, E>>,
    abandoned: bool,
}

/// Settling half of a [`Deferred`].
#[derive(Debug)]
pub struct Settle<T, E> {
    tx: oneshot::Sender<Result<T, E>>,
}

pub fn deferred<T, E>() -> (Deferred<T, E>, Settle<T, E>) {
    let (tx, rx) = oneshot::channel();
    (
        Deferred {
            rx,
            abandoned: false,
        },
        Settle { tx },
    )
}

impl<T, E> Settle<T, E> {
    /// Returns false when the [`Deferred`] was already dropped.
    pub fn settle(self, outcome: Result<T, E>) -> bool {
        self.tx.send(outcome).is_ok()
    }

    pub fn resolve(self, value: T) -> bool {
        self.settle(Ok(value))
    }

    pub fn reject(self, error: E) -> bool {
        self.settle(Err(error))
    }
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.abandoned {
            return Poll::Pending;
        }
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(_)) => {
                self.abandoned = true;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
