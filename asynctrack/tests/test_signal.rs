use asynctrack::{deferred, Status, TrackerStreamExt};
use futures::StreamExt;
use futures_signals::signal::SignalExt;
use crate::common::{mount, ApiError, Book};

mod common;

#[tokio::test]
async fn test_status_signal_follows_run() {
    let (_scope, tracker) = mount();
    let mut statuses = tracker.to_signal().map(|state| state.status).to_stream();
    assert_eq!(statuses.next().await, Some(Status::Idle));

    let (load, settle) = deferred::<Vec<Book>, ApiError>();
    let handle = tracker.run(load).unwrap();
    assert_eq!(statuses.next().await, Some(Status::Pending));

    settle.resolve(vec![Book::new(1, "The Way of Kings")]);
    assert_eq!(statuses.next().await, Some(Status::Resolved));
    handle.await.unwrap();
}

#[tokio::test]
async fn test_state_stream_until_settled() {
    let (_scope, tracker) = mount();
    let (load, settle) = deferred::<Vec<Book>, ApiError>();
    let handle = tracker.run(load).unwrap();

    let states = tracker.to_stream().until_settled();
    let collector = tokio::spawn(states.collect::<Vec<_>>());
    tokio::task::yield_now().await;

    settle.reject(ApiError {
        status: 404,
        message: "Not Found".to_string(),
    });
    assert!(handle.await.is_err());

    let states = collector.await.unwrap();
    assert!(states.last().unwrap().is_error());
    assert!(states.iter().rev().skip(1).all(|state| state.is_loading()));
}
