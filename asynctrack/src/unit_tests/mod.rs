use crate::{AsyncTracker, OperationState, Scope, Status, TrackerConfig};

mod teardown_test;

pub type TestTracker = AsyncTracker<String, String>;

pub fn new_tracker() -> (Scope, TestTracker) {
    let scope = Scope::new();
    let tracker = AsyncTracker::new(&scope);
    (scope, tracker)
}

pub fn retaining_tracker(initial: &str) -> (Scope, TestTracker) {
    let scope = Scope::new();
    let tracker = AsyncTracker::with_config(
        &scope,
        OperationState::with_data(initial.to_string()),
        TrackerConfig::new().retain_data_while_pending(),
    );
    (scope, tracker)
}

pub fn pending() -> OperationState<String, String> {
    OperationState {
        status: Status::Pending,
        data: None,
        error: None,
    }
}
