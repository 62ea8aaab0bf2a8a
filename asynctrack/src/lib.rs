//! Race-safe state tracking for one-shot asynchronous operations.
//!
//! An [`AsyncTracker`] turns a single future into an [`OperationState`] that UI
//! code can read at any time. Only the most recently started operation may
//! write its settlement, and nothing is written once the owning [`Scope`] ends.

mod action;
mod config;
mod deferred;
mod error;
mod operation_state;
mod scope;
mod stream_ext;
mod tracker;

#[cfg(test)]
mod unit_tests;

pub use action::*;
pub use config::*;
pub use deferred::*;
pub use error::*;
pub use operation_state::*;
pub use scope::*;
pub use stream_ext::*;
pub use tracker::*;
