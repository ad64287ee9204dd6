//! Validated countdown duration.

use serde::{Deserialize, Serialize};

use super::error::TimerError;

/// Upper bound for each duration component, matching a minute/second dial.
pub const MAX_COMPONENT: u32 = 59;

/// A countdown duration as a minutes/seconds pair.
///
/// Both components are restricted to `0..=59`; out-of-range values are
/// rejected at construction rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerDuration {
    minutes: u32,
    seconds: u32,
}

impl TimerDuration {
    /// Creates a duration, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::DurationOutOfRange`] if either component
    /// exceeds 59.
    pub fn new(minutes: u32, seconds: u32) -> Result<Self, TimerError> {
        if minutes > MAX_COMPONENT {
            return Err(TimerError::DurationOutOfRange {
                field: "minutes",
                value: minutes,
            });
        }
        if seconds > MAX_COMPONENT {
            return Err(TimerError::DurationOutOfRange {
                field: "seconds",
                value: seconds,
            });
        }
        Ok(Self { minutes, seconds })
    }

    /// Returns the minutes component.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the seconds component.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Returns the duration flattened to seconds.
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// Returns true for the zero duration.
    pub fn is_zero(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }
}

impl Default for TimerDuration {
    fn default() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
        }
    }
}

impl std::fmt::Display for TimerDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
