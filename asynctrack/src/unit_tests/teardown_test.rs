use crate::unit_tests::{new_tracker, pending, retaining_tracker};
use crate::{deferred, OperationState, Status};

// Test that nothing is written after the scope ends while pending
#[tokio::test]
async fn test_no_update_after_teardown() {
    let (scope, tracker) = retaining_tracker("first");
    assert_eq!(tracker.data(), Some("first".to_string()));

    let (promise, settle) = deferred::<String, String>();
    let handle = tracker.run(promise).unwrap();
    assert_eq!(tracker.status(), Status::Pending);

    scope.end();
    settle.resolve("second".to_string());
    assert_eq!(handle.await, Ok("second".to_string()));

    assert_eq!(tracker.status(), Status::Pending);
    assert_eq!(tracker.data(), Some("first".to_string()));
    assert!(!tracker.is_live());
}

// Test teardown with the default pending policy
#[tokio::test]
async fn test_no_update_after_teardown_clearing() {
    let (scope, tracker) = new_tracker();
    let (promise, settle) = deferred::<String, String>();

    let handle = tracker.run(promise).unwrap();
    scope.end();

    settle.reject("too late".to_string());
    assert_eq!(handle.await, Err("too late".to_string()));
    assert_eq!(tracker.state(), pending());
}

// Test that direct writes are ignored after teardown
#[tokio::test]
async fn test_direct_writes_after_teardown() {
    let (scope, tracker) = new_tracker();
    tracker.set_data("kept".to_string());
    scope.end();

    tracker.set_data("dropped".to_string());
    tracker.set_error("dropped".to_string());
    tracker.reset();

    assert_eq!(tracker.state(), OperationState::resolved("kept".to_string()));
}

// Test that run after teardown still hands back the outcome without touching state
#[tokio::test]
async fn test_run_after_teardown() {
    let (scope, tracker) = new_tracker();
    scope.end();

    let handle = tracker
        .run(async { Ok::<String, String>("value".to_string()) })
        .unwrap();

    assert_eq!(tracker.state(), OperationState::idle());
    assert_eq!(handle.await, Ok("value".to_string()));
    assert_eq!(tracker.state(), OperationState::idle());
}

// Test that ending a parent scope ends the tracker mounted in a child
#[tokio::test]
async fn test_parent_teardown_reaches_child_scope() {
    let (parent, _) = new_tracker();
    let child = parent.child();
    let tracker = crate::AsyncTracker::<String, String>::new(&child);

    let (promise, settle) = deferred::<String, String>();
    let handle = tracker.run(promise).unwrap();
    parent.end();

    settle.resolve("late".to_string());
    handle.await.unwrap();
    assert_eq!(tracker.state(), pending());
}

// Test teardown through a guard going out of scope
#[tokio::test]
async fn test_guard_teardown() {
    let (scope, tracker) = new_tracker();
    let (promise, settle) = deferred::<String, String>();

    let handle = {
        let _guard = scope.drop_guard();
        tracker.run(promise).unwrap()
    };

    settle.resolve("late".to_string());
    handle.await.unwrap();
    assert!(!scope.is_live());
    assert_eq!(tracker.state(), pending());
}
