//! Display utilities for the countdown CLI.
//!
//! This module provides formatted output for:
//! - Success messages
//! - Error messages
//! - Status display

use crate::types::IpcResponse;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows a success message for setting the duration.
    pub fn show_set_success(response: &IpcResponse) {
        println!("* Duration set");
        Self::show_remaining(response);
    }

    /// Shows a success message for timer start.
    pub fn show_start_success(response: &IpcResponse) {
        println!("> Countdown started");
        Self::show_remaining(response);
    }

    /// Shows a success message for timer pause.
    pub fn show_pause_success(response: &IpcResponse) {
        println!("|| Countdown paused");
        Self::show_remaining(response);
    }

    /// Shows a success message for timer reset.
    pub fn show_reset_success(_response: &IpcResponse) {
        println!("[] Timer reset");
    }

    /// Shows the current timer status.
    pub fn show_status(response: &IpcResponse) {
        println!("Countdown status");
        println!("----------------");

        if let Some(data) = &response.data {
            let state = data.state.as_deref().unwrap_or("unknown");
            println!("State: {}", state);

            if state != "idle" {
                if let Some(remaining) = data.remaining_seconds {
                    let (minutes, seconds) = Self::format_time(remaining);
                    println!("Remaining: {:02}:{:02}", minutes, seconds);
                }
                if let Some(total) = data.total_seconds {
                    let (minutes, seconds) = Self::format_time(total);
                    println!("Configured: {:02}:{:02}", minutes, seconds);
                }
            } else if let Some(total) = data.total_seconds {
                if total > 0 {
                    let (minutes, seconds) = Self::format_time(total);
                    println!("Configured: {:02}:{:02}", minutes, seconds);
                }
            }
        } else {
            println!("The timer is not reachable");
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("error: {}", message);
    }

    /// Shows the remaining time from a response, if present.
    fn show_remaining(response: &IpcResponse) {
        if let Some(data) = &response.data {
            if let Some(remaining) = data.remaining_seconds {
                let (minutes, seconds) = Self::format_time(remaining);
                println!("  Remaining: {:02}:{:02}", minutes, seconds);
            }
        }
    }

    /// Formats remaining seconds as (minutes, seconds).
    fn format_time(total_seconds: u32) -> (u32, u32) {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        (minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================
