//! Completion alert delivery.
//!
//! The countdown core's contract is "invoke the notifier exactly once at
//! completion with a fixed payload" — how the alert is rendered is the
//! notifier's business. This module provides:
//!
//! - [`Notifier`]: the delivery seam consumed by the engine
//! - [`ConsoleNotifier`]: terminal delivery (bell, formatted lines, an
//!   optional audible chime), each dispatch tagged with a request id
//! - [`MockNotifier`]: a recording implementation for tests

pub mod content;
pub mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{info, warn};
use uuid::Uuid;

use crate::sound::{default_cue, SoundCue, SoundPlayer};

pub use self::content::{
    elapsed_alert, AlertPayload, AlertPayloadBuilder, ELAPSED_CATEGORY, ELAPSED_SOUND,
    ELAPSED_SUBTITLE, ELAPSED_TITLE,
};
pub use self::error::NotifyError;

// ============================================================================
// Notifier
// ============================================================================

/// Capability for delivering a completion alert.
///
/// Delivery is fire-and-forget from the timer's perspective: the engine
/// logs a failure and moves on, it never retries.
pub trait Notifier {
    /// Delivers the alert.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; callers may ignore it.
    fn notify(&self, payload: &AlertPayload) -> Result<(), NotifyError>;

    /// Returns true if a delivery channel is available.
    fn is_available(&self) -> bool;
}

// ============================================================================
// ConsoleNotifier
// ============================================================================

/// Delivers alerts to the terminal.
///
/// Writes the alert with a BEL so the terminal itself signals, and plays
/// the payload's named cue through the configured sound player, if any.
pub struct ConsoleNotifier {
    /// Optional audible delivery; shared with the daemon
    sound: Option<Arc<dyn SoundPlayer + Send + Sync>>,
}

impl ConsoleNotifier {
    /// Creates a silent console notifier.
    #[must_use]
    pub fn new() -> Self {
        Self { sound: None }
    }

    /// Creates a console notifier that also plays the alert cue.
    #[must_use]
    pub fn with_sound(sound: Arc<dyn SoundPlayer + Send + Sync>) -> Self {
        Self { sound: Some(sound) }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, payload: &AlertPayload) -> Result<(), NotifyError> {
        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            category = %payload.category,
            "delivering completion alert"
        );

        // BEL rings the terminal even when the output is not being watched.
        println!("\x07{} ({})", payload.title, payload.subtitle);

        if let Some(player) = &self.sound {
            let cue = SoundCue::find(&payload.sound).unwrap_or_else(|_| default_cue());
            if let Err(e) = player.play(&cue) {
                warn!("alert sound failed: {}", e);
            }
        }

        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}

// ============================================================================
// MockNotifier
// ============================================================================

#[derive(Debug, Default)]
struct MockInner {
    notifications: Mutex<Vec<AlertPayload>>,
    available: AtomicBool,
    should_fail: AtomicBool,
}

/// Recording notifier for tests.
///
/// Clones share state, so a test can hand one clone to the engine and
/// inspect deliveries through another.
#[derive(Debug, Clone)]
pub struct MockNotifier {
    inner: Arc<MockInner>,
}

impl MockNotifier {
    /// Creates a mock that records every delivery.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MockInner {
                notifications: Mutex::new(Vec::new()),
                available: AtomicBool::new(true),
                should_fail: AtomicBool::new(false),
            }),
        }
    }

    /// Makes subsequent deliveries fail.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.inner.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Toggles reported availability.
    pub fn set_available(&self, available: bool) {
        self.inner.available.store(available, Ordering::SeqCst);
    }

    /// Returns the recorded payloads.
    #[must_use]
    pub fn get_notifications(&self) -> Vec<AlertPayload> {
        self.inner.notifications.lock().unwrap().clone()
    }

    /// Returns how many deliveries were recorded.
    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.inner.notifications.lock().unwrap().len()
    }

    /// Clears the recorded payloads.
    pub fn clear_recorded(&self) {
        self.inner.notifications.lock().unwrap().clear();
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, payload: &AlertPayload) -> Result<(), NotifyError> {
        if self.inner.should_fail.load(Ordering::SeqCst) {
            return Err(NotifyError::SendFailed("mock failure".to_string()));
        }
        self.inner
            .notifications
            .lock()
            .unwrap()
            .push(payload.clone());
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.inner.available.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Tests
// ============================================================================
