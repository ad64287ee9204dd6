//! Countdown Timer Library
//!
//! This library provides the core functionality for the countdown CLI.
//! It includes:
//! - The countdown engine: a state machine over Idle/Running/Paused with
//!   pause/resume bookkeeping and a one-shot completion alert
//! - Injected scheduler and notifier seams, with tokio/console bindings
//!   for production and manual/mock bindings for tests
//! - IPC server/client for daemon-CLI communication
//! - CLI command parsing and display utilities
//! - Sound cues for the completion chime (behind the `sound` feature)

pub mod cli;
pub mod daemon;
pub mod notify;
pub mod sound;
pub mod timer;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{CountdownState, IpcRequest, IpcResponse, ResponseData, SetParams, TimerState};

// Re-export timer types
pub use timer::{
    CountdownTimer, ManualScheduler, Scheduler, TimerDuration, TimerError, TimerEvent,
    TokioScheduler, TICK_INTERVAL,
};

// Re-export notifier types
pub use notify::{
    elapsed_alert, AlertPayload, AlertPayloadBuilder, ConsoleNotifier, MockNotifier, Notifier,
    NotifyError,
};

// Re-export sound types
pub use sound::{default_cue, MockSoundPlayer, SoundCue, SoundError, SoundPlayer};
#[cfg(feature = "sound")]
pub use sound::{try_create_player, RodioSoundPlayer};
