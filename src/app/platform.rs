//! Target platform selection
//!
//! The platform selector is a closed set: it only decides which
//! `build:<platform>` npm script runs after install.

use std::fmt;

use clap::ValueEnum;

use crate::constants::npm::BUILD_SCRIPT_PREFIX;

/// Supported build platforms.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows build variant
    Windows,
    /// macOS build variant
    Mac,
}

impl Platform {
    /// Lowercase name as it appears on the command line and in script names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
        }
    }

    /// Name of the npm script that builds this platform's artifacts.
    pub fn build_script(&self) -> String {
        format!("{}{}", BUILD_SCRIPT_PREFIX, self.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_script_names() {
        assert_eq!(Platform::Windows.build_script(), "build:windows");
        assert_eq!(Platform::Mac.build_script(), "build:mac");
    }

    #[test]
    fn parses_lowercase_cli_values() {
        assert_eq!(
            Platform::from_str("windows", true).unwrap(),
            Platform::Windows
        );
        assert_eq!(Platform::from_str("mac", true).unwrap(), Platform::Mac);
        assert!(Platform::from_str("linux", true).is_err());
    }

    #[test]
    fn display_matches_cli_value() {
        assert_eq!(Platform::Windows.to_string(), "windows");
        assert_eq!(Platform::Mac.to_string(), "mac");
    }
}
