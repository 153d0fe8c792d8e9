//! Momentum release helper library
//!
//! Patches the @momentum-design/tokens entry in a package.json manifest and
//! drives the npm install and platform build steps that publish the result.
//! The whole flow is sequential: one manifest write followed by two child
//! processes, with every failure terminal.

pub mod app;
pub mod cli;
pub mod constants;
pub mod errors;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_accessible() {
        assert_eq!(constants::manifest::PACKAGE_JSON, "package.json");
        assert_eq!(
            constants::manifest::TOKENS_DEPENDENCY,
            "@momentum-design/tokens"
        );
        assert_eq!(constants::npm::PROGRAM, "npm");
    }

    #[test]
    fn error_types_work() {
        let manifest_error = errors::ManifestError::NotFound {
            path: "package.json".into(),
        };
        let app_error = AppError::Manifest(manifest_error);

        assert_eq!(app_error.category(), "manifest");
        assert_eq!(app_error.exit_code(), 1);
    }
}
