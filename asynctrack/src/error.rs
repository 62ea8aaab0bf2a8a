use thiserror::Error;

/// Errors the tracker itself raises.
///
/// Failures of a tracked operation are never reported here; they are stored
/// in [`OperationState::error`](crate::OperationState).
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TrackerError {
    /// `run` was handed something that cannot be awaited.
    #[error(
        "The argument passed to run must be a promise. Maybe a function that's passed isn't returning anything?"
    )]
    InvalidArgument,
}

impl TrackerError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TrackerError::InvalidArgument)
    }
}
