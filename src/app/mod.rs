//! Core application logic for the momentum release helper
//!
//! This module contains the manifest loader and version patcher, the
//! subprocess runner, and the platform selector that picks the build
//! variant.

pub mod command;
pub mod manifest;
pub mod platform;

// Re-export main public API
pub use command::{release_steps, CommandStep};
pub use manifest::PackageManifest;
pub use platform::Platform;
