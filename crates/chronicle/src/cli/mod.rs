//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! chronicle binary.

mod commands;
mod play;

pub use commands::{Cli, Commands};
pub use play::run_play;
