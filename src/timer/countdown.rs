//! Countdown engine.
//!
//! This module provides the core timer functionality:
//! - Lifecycle transitions (Idle → Running → Paused/Completed)
//! - Tick handling with a one-shot completion alert
//! - Event firing for displays and logging

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use crate::notify::{elapsed_alert, Notifier};
use crate::types::{CountdownState, TimerState};

use super::duration::TimerDuration;
use super::error::TimerError;
use super::scheduler::Scheduler;

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for displays and external integrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// The remaining time changed (fired on configure, tick, and reset)
    Tick {
        /// Remaining seconds
        remaining_seconds: u32,
    },
    /// The lifecycle state changed (fired on start, pause, and reset)
    StateChanged {
        /// New state
        state: TimerState,
    },
}

// ============================================================================
// CountdownTimer
// ============================================================================

/// Countdown timer engine.
///
/// Wraps the pure [`CountdownState`] with scheduling, event emission, and
/// the completion alert. The scheduler and notifier are injected so the
/// engine can be driven synchronously in tests.
pub struct CountdownTimer<S: Scheduler, N: Notifier> {
    /// Countdown data model
    state: CountdownState,
    /// Tick source
    scheduler: S,
    /// Completion alert sink
    notifier: N,
    /// Active schedule, present only while Running
    schedule: Option<S::Handle>,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl<S: Scheduler, N: Notifier> CountdownTimer<S, N> {
    /// Creates a new timer in Idle with the given collaborators.
    pub fn new(scheduler: S, notifier: N, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: CountdownState::new(),
            scheduler,
            notifier,
            schedule: None,
            event_tx,
        }
    }

    /// Sets the countdown duration.
    ///
    /// Emits a tick event with the new remaining value so a display can
    /// refresh immediately.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::InvalidState`] unless the timer is Idle; an
    /// in-flight countdown is never silently reconfigured.
    pub fn configure(&mut self, duration: TimerDuration) -> Result<(), TimerError> {
        if !self.state.is_idle() {
            return Err(TimerError::InvalidState {
                operation: "configure",
                state: self.state.state,
            });
        }

        self.state.configure(duration.total_seconds());
        self.emit(TimerEvent::Tick {
            remaining_seconds: self.state.remaining_seconds,
        })
    }

    /// Starts the countdown, or resumes it from a pause.
    ///
    /// A no-op while already Running. Resuming continues from the paused
    /// remainder, never from the configured total.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.state.is_running() {
            return Ok(());
        }

        self.state.begin();
        self.schedule = Some(self.scheduler.schedule(TICK_INTERVAL));
        self.emit(TimerEvent::StateChanged {
            state: self.state.state,
        })
    }

    /// Pauses the countdown, snapshotting the remaining time.
    ///
    /// A no-op unless Running.
    pub fn pause(&mut self) -> Result<(), TimerError> {
        if !self.state.is_running() {
            return Ok(());
        }

        self.clear_schedule();
        self.state.pause();
        self.emit(TimerEvent::StateChanged {
            state: self.state.state,
        })
    }

    /// Resets the timer to pristine Idle, cancelling any pending schedule.
    ///
    /// Valid from any state; this is the only operation that clears the
    /// configured duration.
    pub fn reset(&mut self) -> Result<(), TimerError> {
        self.clear_schedule();
        self.apply_reset()
    }

    /// Advances the countdown by one tick.
    ///
    /// Invoked by the scheduler binding. Ticks arriving while the timer is
    /// not Running (late dispatches from a cancelled schedule) are ignored.
    /// When the counter reaches zero the completion alert fires exactly
    /// once and the timer folds back to Idle.
    pub fn handle_tick(&mut self) -> Result<(), TimerError> {
        if !self.state.is_running() {
            return Ok(());
        }

        let completed = self.state.tick();

        self.emit(TimerEvent::Tick {
            remaining_seconds: self.state.remaining_seconds,
        })?;

        if completed {
            self.handle_completion()?;
        }

        Ok(())
    }

    /// Fires the completion alert and returns the timer to Idle.
    ///
    /// The alert is fire-and-forget: delivery failures are logged and the
    /// reset runs regardless.
    fn handle_completion(&mut self) -> Result<(), TimerError> {
        self.clear_schedule();
        self.state.complete();

        let payload = elapsed_alert();
        if let Err(e) = self.notifier.notify(&payload) {
            warn!("completion alert failed: {e}");
        }

        self.apply_reset()
    }

    /// Zeroes the state and publishes the reset to listeners.
    fn apply_reset(&mut self) -> Result<(), TimerError> {
        self.state.reset();
        self.emit(TimerEvent::Tick {
            remaining_seconds: 0,
        })?;
        self.emit(TimerEvent::StateChanged {
            state: TimerState::Idle,
        })
    }

    /// Cancels the active schedule, if any.
    fn clear_schedule(&mut self) {
        if let Some(handle) = self.schedule.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn emit(&self, event: TimerEvent) -> Result<(), TimerError> {
        self.event_tx
            .send(event)
            .map_err(|_| TimerError::EventChannelClosed)
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> TimerState {
        self.state.state
    }

    /// Returns the remaining seconds.
    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    /// Returns the configured duration in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.state.total_seconds
    }

    /// Returns a view of the full countdown state.
    pub fn snapshot(&self) -> &CountdownState {
        &self.state
    }
}

// ============================================================================
// Tests
// ============================================================================
