//! Sound system error types.

use thiserror::Error;

/// Errors that can occur in the sound system.
#[derive(Debug, Error)]
pub enum SoundError {
    /// No audio output device is available.
    #[error("no audio output device available: {0}")]
    DeviceNotAvailable(String),

    /// Playback failed after the device was opened.
    #[error("audio playback failed: {0}")]
    PlaybackError(String),

    /// The requested cue name is not registered.
    #[error("unknown sound cue: {0}")]
    CueNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_not_available_display() {
        let err = SoundError::DeviceNotAvailable("no default device".to_string());
        assert!(err.to_string().contains("no default device"));
    }

    #[test]
    fn test_cue_not_found_display() {
        let err = SoundError::CueNotFound("gong".to_string());
        assert_eq!(err.to_string(), "unknown sound cue: gong");
    }
}
