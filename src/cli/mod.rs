//! Command-line interface components
//!
//! This module contains CLI-specific code for the momentum release helper,
//! including argument parsing and the release command handler.

pub mod args;
pub mod commands;

pub use args::{Cli, GlobalArgs};
pub use commands::handle_release;
