//! CLI module for the countdown timer.
//!
//! This module contains:
//! - `commands`: clap command definitions
//! - `client`: IPC client for daemon communication
//! - `display`: formatted CLI output

pub mod client;
pub mod commands;
pub mod display;

pub use client::IpcClient;
pub use commands::{Cli, Commands, DaemonArgs, SetArgs, StartArgs};
pub use display::Display;
