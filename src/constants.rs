//! Application constants for the momentum release helper
//!
//! This module centralizes the fixed paths, dependency names and npm
//! invocations used throughout the application, organized by functional
//! domain.

/// Manifest-related constants
pub mod manifest {
    /// Relative path of the package manifest, resolved against the
    /// current working directory
    pub const PACKAGE_JSON: &str = "package.json";

    /// The dependency whose version this tool updates
    pub const TOKENS_DEPENDENCY: &str = "@momentum-design/tokens";

    /// Top-level manifest key holding the dependency map
    pub const DEPENDENCIES_KEY: &str = "dependencies";
}

/// npm invocation constants
pub mod npm {
    /// The npm executable name, resolved through PATH
    pub const PROGRAM: &str = "npm";

    /// Subcommand that installs dependencies from the manifest
    pub const INSTALL: &str = "install";

    /// Subcommand that runs a package script
    pub const RUN: &str = "run";

    /// Prefix of the per-platform build scripts (`build:windows`, `build:mac`)
    pub const BUILD_SCRIPT_PREFIX: &str = "build:";
}
