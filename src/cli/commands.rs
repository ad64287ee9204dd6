//! Command definitions for the countdown CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// Countdown - a terminal countdown timer
#[derive(Parser, Debug)]
#[command(
    name = "countdown",
    version,
    about = "A terminal countdown timer with pause/resume and a completion alert",
    long_about = "A minute/second countdown timer driven from the terminal.\n\
                  Run `countdown daemon` in one shell, then set, start, pause,\n\
                  and reset the countdown from any other.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Set the countdown duration (only accepted while idle)
    Set(SetArgs),

    /// Start the countdown, or resume it from a pause
    Start(StartArgs),

    /// Pause the running countdown
    Pause,

    /// Reset the timer to idle, clearing the configured duration
    Reset,

    /// Show current timer status
    Status,

    /// Run the timer daemon in the foreground
    Daemon(DaemonArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Set Command Arguments
// ============================================================================

/// Arguments for the set command
#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Minutes component of the duration (0-59)
    #[arg(
        short,
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub minutes: u32,

    /// Seconds component of the duration (0-59)
    #[arg(
        short,
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub seconds: u32,
}

impl Default for SetArgs {
    fn default() -> Self {
        Self {
            minutes: 0,
            seconds: 0,
        }
    }
}

// ============================================================================
// Start Command Arguments
// ============================================================================

/// Arguments for the start command
#[derive(Args, Debug, Clone, Default)]
pub struct StartArgs {
    /// Minutes component of the duration (0-59); sets the duration first
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub minutes: Option<u32>,

    /// Seconds component of the duration (0-59); sets the duration first
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub seconds: Option<u32>,
}

impl StartArgs {
    /// Returns true if a duration was given alongside start.
    pub fn has_duration(&self) -> bool {
        self.minutes.is_some() || self.seconds.is_some()
    }
}

// ============================================================================
// Daemon Command Arguments
// ============================================================================

/// Arguments for the daemon command
#[derive(Args, Debug, Clone, Default)]
pub struct DaemonArgs {
    /// Socket path (defaults to ~/.countdown/countdown.sock)
    #[arg(long)]
    pub socket: Option<PathBuf>,

    /// Disable the audible completion chime
    #[arg(long)]
    pub no_sound: bool,
}

// ============================================================================
// Tests
// ============================================================================
