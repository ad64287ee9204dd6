//! Sound cue definitions.
//!
//! Cues are short tone sequences synthesized at playback time, so no audio
//! assets ship with the binary. Each cue has a stable name that alert
//! payloads refer to.

use super::error::SoundError;

/// A single synthesized tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in hertz
    pub frequency_hz: f32,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// A named sequence of tones.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundCue {
    name: String,
    tones: Vec<Tone>,
}

impl SoundCue {
    /// Creates a cue from a name and tone sequence.
    #[must_use]
    pub fn new(name: &str, tones: Vec<Tone>) -> Self {
        Self {
            name: name.to_string(),
            tones,
        }
    }

    /// The short informational chime: a rising two-note figure.
    #[must_use]
    pub fn chime() -> Self {
        Self::new(
            "chime",
            vec![
                Tone {
                    frequency_hz: 880.0,
                    duration_ms: 150,
                },
                Tone {
                    frequency_hz: 1320.0,
                    duration_ms: 250,
                },
            ],
        )
    }

    /// A single flat beep.
    #[must_use]
    pub fn beep() -> Self {
        Self::new(
            "beep",
            vec![Tone {
                frequency_hz: 1000.0,
                duration_ms: 200,
            }],
        )
    }

    /// Looks up a registered cue by name.
    ///
    /// # Errors
    ///
    /// Returns [`SoundError::CueNotFound`] for unknown names.
    pub fn find(name: &str) -> Result<Self, SoundError> {
        match name {
            "chime" => Ok(Self::chime()),
            "beep" => Ok(Self::beep()),
            other => Err(SoundError::CueNotFound(other.to_string())),
        }
    }

    /// Returns the cue name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the tone sequence.
    #[must_use]
    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    /// Returns the total playback length in milliseconds.
    #[must_use]
    pub fn total_duration_ms(&self) -> u64 {
        self.tones.iter().map(|t| t.duration_ms).sum()
    }
}

/// Returns the cue played when no specific cue is requested.
#[must_use]
pub fn default_cue() -> SoundCue {
    SoundCue::chime()
}
