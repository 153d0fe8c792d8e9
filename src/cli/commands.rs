//! Command handler for the momentum release helper CLI
//!
//! Implements the release flow: patch the manifest, persist it, then run
//! the install and build steps in order. There is no transaction across the
//! steps: a build failure leaves the already-written manifest in place.

use tracing::info;

use crate::app::{release_steps, PackageManifest, Platform};
use crate::constants::manifest::{PACKAGE_JSON, TOKENS_DEPENDENCY};
use crate::errors::Result;

/// Run a release: update the tokens dependency, install, build.
///
/// The manifest is read from `package.json` in the current working
/// directory. Each step starts only after the previous one's effect (file
/// write or process exit) has completed; the first failure is terminal.
pub async fn handle_release(version: &str, platform: Platform) -> Result<()> {
    info!(
        "Releasing {} {} for platform {}",
        TOKENS_DEPENDENCY, version, platform
    );

    let mut manifest = PackageManifest::load(PACKAGE_JSON).await?;
    let previous = manifest.set_dependency_version(TOKENS_DEPENDENCY, version)?;
    manifest.save().await?;

    match previous {
        Some(old) => println!(
            "Updated {} from {} to {} in {}",
            TOKENS_DEPENDENCY,
            old,
            version,
            manifest.path().display()
        ),
        None => println!(
            "Added {} at {} in {}",
            TOKENS_DEPENDENCY,
            version,
            manifest.path().display()
        ),
    }

    for step in release_steps(platform) {
        println!("Running: {}", step.command_line());
        step.run().await?;
        println!("Completed: {}", step.label());
    }

    Ok(())
}
