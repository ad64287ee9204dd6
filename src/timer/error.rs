//! Timer error types.

use thiserror::Error;

use crate::types::TimerState;

/// Errors reported by the countdown timer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// The operation is not permitted in the current lifecycle state.
    #[error("cannot {operation} while the timer is {state}")]
    InvalidState {
        /// The rejected operation
        operation: &'static str,
        /// State the timer was in at the time
        state: TimerState,
    },

    /// A duration component was outside the accepted range.
    #[error("{field} must be between 0 and 59, got {value}")]
    DurationOutOfRange {
        /// Which component was rejected
        field: &'static str,
        /// The rejected value
        value: u32,
    },

    /// The event listener hung up; the timer has nobody to report to.
    #[error("timer event channel is closed")]
    EventChannelClosed,
}

impl TimerError {
    /// Returns true if this error reports a state-machine violation.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Returns true if this error reports a rejected input value.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::DurationOutOfRange { .. })
    }
}
