use crate::OperationState;
use futures_core::stream::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream helpers for the state stream of an [`AsyncTracker`](crate::AsyncTracker).
pub trait TrackerStreamExt<T, E>: Stream<Item = OperationState<T, E>> {
    /// Yields states up to and including the first settled one, then ends.
    ///
    /// The state stream replays the current state first, so subscribe after
    /// calling `run` if the tracker may already hold a settled state.
    ///
    /// ```
    /// use asynctrack::{AsyncTracker, TrackerStreamExt};
    ///
    /// async fn example(tracker: AsyncTracker<u32, String>) {
    ///     let _states = tracker.to_stream().until_settled();
    /// }
    /// ```
    fn until_settled(self) -> UntilSettled<Self>
    where
        Self: Sized,
    {
        UntilSettled {
            stream: self,
            done: false,
        }
    }
}

impl<S, T, E> TrackerStreamExt<T, E> for S where S: Stream<Item = OperationState<T, E>> {}

#[pin_project(project = UntilSettledProj)]
#[derive(Debug)]
#[must_use = "Streams do nothing unless polled"]
pub struct UntilSettled<S> {
    #[pin]
    stream: S,
    done: bool,
}

impl<S, T, E> Stream for UntilSettled<S>
where
    S: Stream<Item = OperationState<T, E>>,
{
    type Item = OperationState<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let UntilSettledProj { stream, done } = self.project();
        if *done {
            return Poll::Ready(None);
        }
        match stream.poll_next(cx) {
            Poll::Ready(Some(state)) => {
                *done = state.is_settled();
                Poll::Ready(Some(state))
            }
            Poll::Ready(None) => {
                *done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
