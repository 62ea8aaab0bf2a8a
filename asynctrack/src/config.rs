#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happens to `data` when a new operation starts.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PendingData {
    /// Drop the previous value so nothing stale is shown while waiting.
    #[default]
    Clear,
    /// Keep showing the previous value until the new one settles.
    Retain,
}

/// Construction-time options for an [`AsyncTracker`](crate::AsyncTracker).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    pub pending_data: PendingData,
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pending_data(self, pending_data: PendingData) -> Self {
        Self {
            pending_data,
            ..self
        }
    }

    /// Shorthand for `with_pending_data(PendingData::Retain)`.
    pub fn retain_data_while_pending(self) -> Self {
        self.with_pending_data(PendingData::Retain)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
