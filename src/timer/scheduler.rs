//! Periodic tick scheduling.
//!
//! The countdown engine never touches the wall clock directly. It asks a
//! [`Scheduler`] for a repeating schedule when it starts and cancels the
//! schedule when it pauses, resets, or completes. Production code uses
//! [`TokioScheduler`], which drives a `tokio::time::interval` task; tests
//! use [`ManualScheduler`] and invoke ticks synchronously.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

// ============================================================================
// Scheduler
// ============================================================================

/// Capability for periodic tick dispatch.
pub trait Scheduler {
    /// Token identifying an active schedule.
    type Handle;

    /// Begins dispatching ticks every `interval` until cancelled.
    ///
    /// The first tick arrives one full interval after this call, never
    /// synchronously.
    fn schedule(&mut self, interval: Duration) -> Self::Handle;

    /// Stops the schedule.
    ///
    /// No new dispatch starts after this returns; a tick that was already
    /// in flight may still be observed and is ignored by the timer.
    fn cancel(&mut self, handle: Self::Handle);
}

// ============================================================================
// TokioScheduler
// ============================================================================

/// Production scheduler backed by a tokio interval task.
///
/// Each schedule spawns a task that forwards one `()` per interval onto a
/// shared tick channel; the daemon loop drains the channel and drives the
/// timer. Cancelling aborts the task.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    tick_tx: mpsc::UnboundedSender<()>,
}

impl TokioScheduler {
    /// Creates a scheduler that delivers ticks to `tick_tx`.
    pub fn new(tick_tx: mpsc::UnboundedSender<()>) -> Self {
        Self { tick_tx }
    }

    /// Creates a scheduler together with the receiving end of its
    /// tick channel.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        (Self::new(tick_tx), tick_rx)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = tokio::task::JoinHandle<()>;

    fn schedule(&mut self, interval: Duration) -> Self::Handle {
        let tx = self.tick_tx.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; consume it so
            // dispatch starts one full interval from now.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        })
    }

    fn cancel(&mut self, handle: Self::Handle) {
        handle.abort();
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

#[derive(Debug, Default)]
struct ManualInner {
    next_id: u64,
    active: Option<u64>,
    last_interval: Option<Duration>,
    schedule_calls: u32,
    cancel_calls: u32,
}

/// Manually-driven scheduler for tests.
///
/// Records schedule/cancel calls without touching the clock; tests advance
/// the countdown by invoking the timer's tick handler directly. Clones
/// share state, so a test can keep one clone for inspection while the
/// timer owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualInner>>,
}

impl ManualScheduler {
    /// Creates a new manual scheduler with no active schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a schedule is active.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.inner.lock().unwrap().active.is_some()
    }

    /// Returns the interval of the most recent schedule.
    #[must_use]
    pub fn last_interval(&self) -> Option<Duration> {
        self.inner.lock().unwrap().last_interval
    }

    /// Returns how many schedules have been requested.
    #[must_use]
    pub fn schedule_count(&self) -> u32 {
        self.inner.lock().unwrap().schedule_calls
    }

    /// Returns how many cancellations have been requested.
    #[must_use]
    pub fn cancel_count(&self) -> u32 {
        self.inner.lock().unwrap().cancel_calls
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, interval: Duration) -> Self::Handle {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.active = Some(id);
        inner.last_interval = Some(interval);
        inner.schedule_calls += 1;
        id
    }

    fn cancel(&mut self, handle: Self::Handle) {
        let mut inner = self.inner.lock().unwrap();
        if inner.active == Some(handle) {
            inner.active = None;
        }
        inner.cancel_calls += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================
