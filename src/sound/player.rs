//! Sound player implementation using rodio.
//!
//! Playback runs on a dedicated audio thread that owns the rodio output
//! stream; callers hand cues over a channel and return immediately. The
//! thread synthesizes each tone with a sine-wave source, so playback needs
//! no audio assets.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use tracing::{debug, warn};

use super::cue::SoundCue;
use super::error::SoundError;

/// Playback volume for synthesized tones.
const TONE_AMPLITUDE: f32 = 0.2;

/// A sound player backed by a rodio audio thread.
///
/// The player is thread-safe and can be shared across threads using `Arc`.
/// Playback is non-blocking; cues queue on the audio thread and play in
/// order.
pub struct RodioSoundPlayer {
    /// Cue queue consumed by the audio thread.
    cue_tx: Sender<SoundCue>,
    /// Whether sound playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// Spawns the audio thread and probes the default output device.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all playback is silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (cue_tx, cue_rx) = mpsc::channel::<SoundCue>();
        let (probe_tx, probe_rx) = mpsc::channel::<Result<(), SoundError>>();

        std::thread::Builder::new()
            .name("countdown-audio".to_string())
            .spawn(move || audio_thread(cue_rx, probe_tx))
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        probe_rx
            .recv()
            .map_err(|_| SoundError::DeviceNotAvailable("audio thread died".to_string()))??;

        debug!("audio output stream initialized");

        Ok(Self {
            cue_tx,
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Creates a disabled sound player.
    ///
    /// The audio thread still starts, but every `play` call is skipped.
    ///
    /// # Errors
    ///
    /// May still fail if no output device exists.
    pub fn disabled() -> Result<Self, SoundError> {
        Self::new(true)
    }

    /// Queues a cue for playback.
    ///
    /// Non-blocking; the cue plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if the audio thread is gone.
    pub fn play(&self, cue: &SoundCue) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("sound playback disabled, skipping");
            return Ok(());
        }

        debug!("queueing cue: {}", cue.name());
        self.cue_tx
            .send(cue.clone())
            .map_err(|e| SoundError::PlaybackError(e.to_string()))
    }

    /// Returns true if sound playback is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    /// Enables sound playback.
    pub fn enable(&self) {
        self.disabled.store(false, Ordering::Relaxed);
    }

    /// Disables sound playback.
    pub fn disable(&self) {
        self.disabled.store(true, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Owns the output stream and plays queued cues until all senders drop.
fn audio_thread(cue_rx: Receiver<SoundCue>, probe_tx: Sender<Result<(), SoundError>>) {
    let (stream, handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let _ = probe_tx.send(Err(SoundError::DeviceNotAvailable(e.to_string())));
            return;
        }
    };
    // Keep the stream alive for the lifetime of the thread.
    let _stream = stream;
    let _ = probe_tx.send(Ok(()));

    while let Ok(cue) = cue_rx.recv() {
        let sink = match Sink::try_new(&handle) {
            Ok(sink) => sink,
            Err(e) => {
                warn!("could not open audio sink: {}", e);
                continue;
            }
        };

        for tone in cue.tones() {
            let source = SineWave::new(tone.frequency_hz)
                .take_duration(Duration::from_millis(tone.duration_ms))
                .amplify(TONE_AMPLITUDE);
            sink.append(source);
        }
        sink.sleep_until_end();
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and None is
/// returned so the application continues without sound.
#[must_use]
pub fn try_create_player(disabled: bool) -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new(disabled) {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("audio not available, sound disabled: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: these tests may run in environments without audio hardware
    // (e.g. CI containers); they skip rather than fail when no device
    // exists.

    #[test]
    fn test_disabled_player_skips_playback() {
        let player = match RodioSoundPlayer::disabled() {
            Ok(p) => p,
            Err(_) => return, // no audio device
        };

        assert!(player.is_disabled());
        assert!(player.play(&SoundCue::chime()).is_ok());
    }

    #[test]
    fn test_enable_disable() {
        let player = match RodioSoundPlayer::disabled() {
            Ok(p) => p,
            Err(_) => return,
        };

        assert!(player.is_disabled());
        player.enable();
        assert!(!player.is_disabled());
        player.disable();
        assert!(player.is_disabled());
    }

    #[test]
    fn test_try_create_player_never_panics() {
        let _ = try_create_player(true);
    }

    #[test]
    fn test_debug_impl() {
        let player = match RodioSoundPlayer::disabled() {
            Ok(p) => p,
            Err(_) => return,
        };
        let debug_str = format!("{:?}", player);
        assert!(debug_str.contains("RodioSoundPlayer"));
    }
}
