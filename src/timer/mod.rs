//! Countdown timer core.
//!
//! This module contains the timer state machine and its collaborator
//! seams:
//! - `countdown`: the engine driving lifecycle transitions and ticks
//! - `duration`: validated minutes/seconds input
//! - `scheduler`: periodic tick dispatch (tokio binding + manual fake)
//! - `error`: typed timer errors

pub mod countdown;
pub mod duration;
pub mod error;
pub mod scheduler;

pub use countdown::{CountdownTimer, TimerEvent, TICK_INTERVAL};
pub use duration::TimerDuration;
pub use error::TimerError;
pub use scheduler::{ManualScheduler, Scheduler, TokioScheduler};
