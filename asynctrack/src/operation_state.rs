#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The phase an operation is in. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Resolved,
    Rejected,
}

impl Status {
    pub fn is_idle(self) -> bool {
        matches!(self, Status::Idle)
    }

    pub fn is_loading(self) -> bool {
        matches!(self, Status::Pending)
    }

    pub fn is_error(self) -> bool {
        matches!(self, Status::Rejected)
    }

    pub fn is_success(self) -> bool {
        matches!(self, Status::Resolved)
    }

    /// True once the operation has produced a value or a failure.
    pub fn is_settled(self) -> bool {
        matches!(self, Status::Resolved | Status::Rejected)
    }
}

/// Snapshot of a tracked operation.
///
/// `data` survives into `Idle` when supplied at construction and into
/// `Pending` when the tracker retains data while pending. `error` is only
/// meaningful while `status` is [`Status::Rejected`].
#[derive(Debug, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationState<T, E> {
    pub status: Status,
    pub data: Option<T>,
    pub error: Option<E>,
}

impl<T, E> OperationState<T, E> {
    pub fn idle() -> Self {
        OperationState {
            status: Status::Idle,
            data: None,
            error: None,
        }
    }

    pub fn pending(data: Option<T>) -> Self {
        OperationState {
            status: Status::Pending,
            data,
            error: None,
        }
    }

    pub fn resolved(data: T) -> Self {
        OperationState {
            status: Status::Resolved,
            data: Some(data),
            error: None,
        }
    }

    pub fn rejected(error: E) -> Self {
        OperationState {
            status: Status::Rejected,
            data: None,
            error: Some(error),
        }
    }

    /// Idle state carrying an initial value.
    pub fn with_data(data: T) -> Self {
        OperationState {
            status: Status::Idle,
            data: Some(data),
            error: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.status.is_idle()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn is_error(&self) -> bool {
        self.status.is_error()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_settled(&self) -> bool {
        self.status.is_settled()
    }

    pub fn data_ref(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error_ref(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Folds an operation outcome into the matching settled state.
    pub fn settle(outcome: Result<T, E>) -> Self {
        match outcome {
            Ok(data) => OperationState::resolved(data),
            Err(error) => OperationState::rejected(error),
        }
    }
}

impl<T, E> Default for OperationState<T, E> {
    fn default() -> Self {
        OperationState::idle()
    }
}

impl<T, E> From<Result<T, E>> for OperationState<T, E> {
    fn from(outcome: Result<T, E>) -> Self {
        OperationState::settle(outcome)
    }
}
