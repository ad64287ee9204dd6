//! Sound playback for the completion alert.
//!
//! This module provides the audible half of alert delivery:
//!
//! - Named [`SoundCue`]s synthesized from tone sequences (no bundled
//!   audio assets)
//! - A rodio-backed player behind the `sound` cargo feature
//! - A mock player for tests
//!
//! Playback is non-blocking and best-effort; the timer never waits on it.

mod cue;
mod error;
#[cfg(feature = "sound")]
mod player;

pub use cue::{default_cue, SoundCue, Tone};
pub use error::SoundError;
#[cfg(feature = "sound")]
pub use player::{try_create_player, RodioSoundPlayer};

/// Trait for sound playback implementations.
///
/// Abstracts playback so delivery code can run against the rodio player
/// in production and a mock in tests.
pub trait SoundPlayer {
    /// Plays a cue.
    ///
    /// This method should be non-blocking; the cue plays in the
    /// background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play(&self, cue: &SoundCue) -> Result<(), SoundError>;

    /// Returns true if the audio system is available.
    fn is_available(&self) -> bool;

    /// Returns true if sound playback is disabled.
    fn is_disabled(&self) -> bool;

    /// Enables sound playback.
    fn enable(&self);

    /// Disables sound playback.
    fn disable(&self);
}

#[cfg(feature = "sound")]
impl SoundPlayer for RodioSoundPlayer {
    fn play(&self, cue: &SoundCue) -> Result<(), SoundError> {
        RodioSoundPlayer::play(self, cue)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn is_disabled(&self) -> bool {
        RodioSoundPlayer::is_disabled(self)
    }

    fn enable(&self) {
        RodioSoundPlayer::enable(self)
    }

    fn disable(&self) {
        RodioSoundPlayer::disable(self)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    play_calls: std::sync::Mutex<Vec<SoundCue>>,
    available: std::sync::atomic::AtomicBool,
    disabled: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_calls: std::sync::Mutex::new(Vec::new()),
            available: std::sync::atomic::AtomicBool::new(true),
            disabled: std::sync::atomic::AtomicBool::new(false),
            should_fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available
            .store(available, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn play_count(&self) -> usize {
        self.play_calls.lock().unwrap().len()
    }

    #[must_use]
    pub fn get_play_calls(&self) -> Vec<SoundCue> {
        self.play_calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.play_calls.lock().unwrap().clear();
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play(&self, cue: &SoundCue) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("mock failure".to_string()));
        }
        if self.disabled.load(std::sync::atomic::Ordering::SeqCst) {
            return Ok(());
        }
        self.play_calls.lock().unwrap().push(cue.clone());
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn enable(&self) {
        self.disabled
            .store(false, std::sync::atomic::Ordering::SeqCst);
    }

    fn disable(&self) {
        self.disabled
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_plays() {
        let mock = MockSoundPlayer::new();

        mock.play(&SoundCue::chime()).unwrap();
        mock.play(&SoundCue::beep()).unwrap();

        assert_eq!(mock.play_count(), 2);
        assert_eq!(mock.get_play_calls()[0].name(), "chime");
        assert_eq!(mock.get_play_calls()[1].name(), "beep");
    }

    #[test]
    fn test_mock_failure() {
        let mock = MockSoundPlayer::new();
        mock.set_should_fail(true);

        assert!(mock.play(&SoundCue::chime()).is_err());
        assert_eq!(mock.play_count(), 0);
    }

    #[test]
    fn test_mock_disabled_skips_silently() {
        let mock = MockSoundPlayer::new();
        mock.disable();

        assert!(mock.play(&SoundCue::chime()).is_ok());
        assert_eq!(mock.play_count(), 0);
    }

    #[test]
    fn test_mock_enable_disable() {
        let mock = MockSoundPlayer::new();
        assert!(!mock.is_disabled());

        mock.disable();
        assert!(mock.is_disabled());

        mock.enable();
        assert!(!mock.is_disabled());
    }

    #[test]
    fn test_mock_availability() {
        let mock = MockSoundPlayer::new();
        assert!(mock.is_available());

        mock.set_available(false);
        assert!(!mock.is_available());
    }

    #[test]
    fn test_mock_clear_calls() {
        let mock = MockSoundPlayer::new();
        mock.play(&SoundCue::chime()).unwrap();

        mock.clear_calls();

        assert_eq!(mock.play_count(), 0);
    }
}
