//! Notifier error types.

use thiserror::Error;

/// Errors that can occur while delivering an alert.
///
/// The timer core treats all of these as best-effort failures: they are
/// logged and never fed back into countdown state.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The alert could not be delivered.
    #[error("failed to deliver alert: {0}")]
    SendFailed(String),

    /// No delivery channel is available.
    #[error("no alert delivery channel is available")]
    Unavailable,
}
