//! Alert payload construction.
//!
//! This module provides a builder for alert payloads and the fixed
//! payload delivered when a countdown elapses.

use serde::{Deserialize, Serialize};

/// Title of the completion alert.
pub const ELAPSED_TITLE: &str = "Timer has elapsed!";

/// Subtitle of the completion alert.
pub const ELAPSED_SUBTITLE: &str = "Alarm";

/// Category identifier of the completion alert.
pub const ELAPSED_CATEGORY: &str = "alarm";

/// Name of the short informational sound played with the alert.
pub const ELAPSED_SOUND: &str = "chime";

/// Payload handed to a [`Notifier`](super::Notifier) when the countdown
/// elapses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPayload {
    /// Alert title
    pub title: String,
    /// Alert subtitle
    pub subtitle: String,
    /// Category identifier
    pub category: String,
    /// Named sound cue to accompany the alert
    pub sound: String,
}

/// Builder for constructing alert payloads.
#[derive(Debug, Default)]
pub struct AlertPayloadBuilder {
    title: String,
    subtitle: String,
    category: String,
    sound: String,
}

impl AlertPayloadBuilder {
    /// Creates a new builder with empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alert title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets the alert subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = subtitle.to_string();
        self
    }

    /// Sets the category identifier.
    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Sets the named sound cue.
    #[must_use]
    pub fn sound(mut self, sound: &str) -> Self {
        self.sound = sound.to_string();
        self
    }

    /// Builds the payload.
    #[must_use]
    pub fn build(self) -> AlertPayload {
        AlertPayload {
            title: self.title,
            subtitle: self.subtitle,
            category: self.category,
            sound: self.sound,
        }
    }
}

/// Creates the fixed payload for countdown completion.
#[must_use]
pub fn elapsed_alert() -> AlertPayload {
    AlertPayloadBuilder::new()
        .title(ELAPSED_TITLE)
        .subtitle(ELAPSED_SUBTITLE)
        .category(ELAPSED_CATEGORY)
        .sound(ELAPSED_SOUND)
        .build()
}
