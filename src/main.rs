//! Momentum release helper CLI application
//!
//! Updates the @momentum-design/tokens version in package.json, then runs
//! `npm install` and the platform-specific build script, exiting with the
//! failing child's own code when a step fails.

use std::error::Error;
use std::process;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use momentum_release::cli::{handle_release, Cli};
use momentum_release::errors::{AppError, Result};

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Parse command line arguments
    let cli = Cli::parse_args();
    cli.validate().map_err(AppError::generic)?;

    // Initialize logging based on verbosity
    init_logging(&cli);

    info!(
        "momentum_release v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    handle_release(&cli.version, cli.platform).await
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    let filter = EnvFilter::from_default_env().add_directive(
        format!("momentum_release={}", log_level)
            .parse()
            .expect("static logging directive is valid"),
    );

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .init();
}
