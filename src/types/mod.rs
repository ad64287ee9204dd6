//! Core data types for the countdown timer.
//!
//! This module defines the data structures used for:
//! - Timer lifecycle state
//! - The pure countdown data model
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};

// ============================================================================
// TimerState
// ============================================================================

/// Lifecycle phase of the countdown timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerState {
    /// No countdown configured or running
    Idle,
    /// Counting down
    Running,
    /// Counting down, currently suspended
    Paused,
    /// Countdown reached zero (transient; folds back to Idle)
    Completed,
}

impl TimerState {
    /// Returns the string representation of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
            TimerState::Completed => "completed",
        }
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_active(&self) -> bool {
        matches!(self, TimerState::Running)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::Idle
    }
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CountdownState
// ============================================================================

/// The countdown data model: configured duration, remaining time, and
/// lifecycle state.
///
/// This is the pure state-machine half of the timer; scheduling, events,
/// and alerting live in [`crate::timer::CountdownTimer`], which wraps it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownState {
    /// Current lifecycle state
    pub state: TimerState,
    /// Configured duration in seconds (set while Idle, cleared by reset)
    pub total_seconds: u32,
    /// Seconds left; `0 <= remaining <= total` while Running/Paused
    pub remaining_seconds: u32,
    /// Snapshot of `remaining_seconds` taken when pausing
    #[serde(default)]
    paused_remainder: u32,
}

impl CountdownState {
    /// Creates a new state in Idle with all counters at zero.
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            total_seconds: 0,
            remaining_seconds: 0,
            paused_remainder: 0,
        }
    }

    /// Sets the configured duration.
    ///
    /// The caller is responsible for only configuring while Idle.
    pub fn configure(&mut self, total_seconds: u32) {
        self.total_seconds = total_seconds;
        self.remaining_seconds = total_seconds;
    }

    /// Moves to Running.
    ///
    /// When resuming from Paused, the remaining time is restored from the
    /// pause snapshot, never from the configured total.
    pub fn begin(&mut self) {
        if self.state == TimerState::Paused {
            self.remaining_seconds = self.paused_remainder;
        }
        self.state = TimerState::Running;
    }

    /// Suspends the countdown, snapshotting the remaining time.
    ///
    /// Only effective while Running.
    pub fn pause(&mut self) {
        if self.state.is_active() {
            self.paused_remainder = self.remaining_seconds;
            self.state = TimerState::Paused;
        }
    }

    /// Marks the countdown as completed.
    pub fn complete(&mut self) {
        self.state = TimerState::Completed;
        self.remaining_seconds = 0;
    }

    /// Returns to the pristine Idle state, clearing the configured duration.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.total_seconds = 0;
        self.remaining_seconds = 0;
        self.paused_remainder = 0;
    }

    /// Decrements the counter by one second.
    ///
    /// Returns true once the countdown has reached zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Returns true if the timer is counting down.
    pub fn is_running(&self) -> bool {
        self.state.is_active()
    }

    /// Returns true if the timer is paused.
    pub fn is_paused(&self) -> bool {
        self.state == TimerState::Paused
    }

    /// Returns true if the timer is idle.
    pub fn is_idle(&self) -> bool {
        self.state == TimerState::Idle
    }

    /// Returns the pause snapshot.
    pub fn paused_remainder(&self) -> u32 {
        self.paused_remainder
    }
}

impl Default for CountdownState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// IPC Types
// ============================================================================

/// Parameters for the set command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetParams {
    /// Minutes component of the duration (0-59)
    pub minutes: u32,
    /// Seconds component of the duration (0-59)
    pub seconds: u32,
}

/// IPC request from client to daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum IpcRequest {
    /// Configure the countdown duration
    Set {
        /// Duration parameters
        #[serde(flatten)]
        params: SetParams,
    },
    /// Start or resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Reset the timer to Idle
    Reset,
    /// Query the current status
    Status,
}

/// Response data for IPC responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    /// Current lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Remaining seconds
    #[serde(rename = "remainingSeconds", skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u32>,
    /// Configured duration in seconds
    #[serde(rename = "totalSeconds", skip_serializing_if = "Option::is_none")]
    pub total_seconds: Option<u32>,
}

impl ResponseData {
    /// Creates response data from the countdown state.
    pub fn from_countdown(state: &CountdownState) -> Self {
        Self {
            state: Some(state.state.as_str().to_string()),
            remaining_seconds: Some(state.remaining_seconds),
            total_seconds: Some(state.total_seconds),
        }
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Optional response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
