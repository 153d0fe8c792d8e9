//! Command-line argument parsing for the momentum release helper
//!
//! This module defines the CLI structure using clap derive macros. The tool
//! has a single action, so there are no subcommands: a version string and a
//! platform selector, plus logging flags.
//!
//! The built-in clap version flag is left disabled because `--version` is
//! taken by the domain argument (the new dependency version).

use clap::{Args, Parser};

use crate::app::Platform;

/// Bump the @momentum-design/tokens dependency and rebuild platform artifacts
#[derive(Parser, Debug)]
#[command(
    name = "momentum_release",
    about = "Update the @momentum-design/tokens version in package.json, then run npm install and the platform build",
    long_about = "Patches the @momentum-design/tokens entry in the package.json of the current \
directory, then runs `npm install` followed by `npm run build:<platform>`. Any failing step \
aborts the release with that step's exit code."
)]
pub struct Cli {
    /// New version for the @momentum-design/tokens dependency
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Platform whose build script runs after install
    #[arg(long, value_enum, value_name = "PLATFORM")]
    pub platform: Platform,

    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Logging and output flags
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level based on global arguments
    pub fn log_level(&self) -> tracing::Level {
        if self.global.quiet {
            tracing::Level::ERROR
        } else if self.global.very_verbose {
            tracing::Level::DEBUG
        } else if self.global.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        }
    }

    /// Reject inputs clap cannot check itself.
    pub fn validate(&self) -> Result<(), String> {
        if self.version.trim().is_empty() {
            return Err("Version must not be empty".to_string());
        }
        Ok(())
    }
}
