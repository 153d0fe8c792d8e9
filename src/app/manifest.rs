//! Package manifest loading, patching and persistence
//!
//! The manifest is held as an order-preserving JSON object so that every
//! field other than the patched dependency entry survives a load/save
//! round trip with its structure and key order intact. The `dependencies`
//! object must already exist before patching; a manifest without one is
//! rejected up front instead of failing on an unguarded lookup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::fs;
use tracing::{debug, info};

use crate::constants::manifest::DEPENDENCIES_KEY;
use crate::errors::{ManifestError, ManifestResult};

/// A `package.json` document bound to the path it was loaded from.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    document: Map<String, Value>,
}

impl PackageManifest {
    /// Load a manifest from `path`.
    ///
    /// Fails with [`ManifestError::NotFound`] when the file does not exist,
    /// [`ManifestError::Parse`] when it is not valid JSON, and
    /// [`ManifestError::NotAnObject`] when the top level is not an object.
    pub async fn load(path: impl AsRef<Path>) -> ManifestResult<Self> {
        let path = path.as_ref().to_path_buf();

        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ManifestError::NotFound { path });
            }
            Err(source) => return Err(ManifestError::Read { path, source }),
        };

        let value: Value =
            serde_json::from_str(&contents).map_err(|source| ManifestError::Parse {
                path: path.clone(),
                source,
            })?;

        let document = match value {
            Value::Object(map) => map,
            _ => return Err(ManifestError::NotAnObject { path }),
        };

        debug!(
            "Loaded manifest {} ({} top-level keys)",
            path.display(),
            document.len()
        );
        Ok(Self { path, document })
    }

    /// Path this manifest was loaded from and will be saved to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current version specifier for `name`, if present as a string.
    pub fn dependency_version(&self, name: &str) -> Option<&str> {
        self.document
            .get(DEPENDENCIES_KEY)?
            .as_object()?
            .get(name)?
            .as_str()
    }

    /// Set `dependencies[name] = version`, inserting the entry if absent.
    ///
    /// Returns the previous specifier when the entry already existed. Fails
    /// with [`ManifestError::MissingDependencies`] when the manifest has no
    /// `dependencies` object; nothing is modified in that case.
    pub fn set_dependency_version(
        &mut self,
        name: &str,
        version: &str,
    ) -> ManifestResult<Option<String>> {
        let dependencies = self
            .document
            .get_mut(DEPENDENCIES_KEY)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| ManifestError::MissingDependencies {
                path: self.path.clone(),
            })?;

        let previous = dependencies.insert(name.to_string(), Value::String(version.to_string()));

        match &previous {
            Some(old) => info!("Updated {} from {} to {}", name, old, version),
            None => info!("Added {} at {}", name, version),
        }

        Ok(previous.and_then(|value| value.as_str().map(str::to_string)))
    }

    /// Persist the full document back to its path, pretty-printed with
    /// 2-space indentation.
    ///
    /// The write goes through a temporary file in the same directory followed
    /// by a rename, so a crash mid-write never leaves a truncated manifest.
    pub async fn save(&self) -> ManifestResult<()> {
        let mut contents =
            serde_json::to_string_pretty(&self.document).map_err(|source| {
                ManifestError::Serialize {
                    path: self.path.clone(),
                    source,
                }
            })?;
        contents.push('\n');

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, contents)
            .await
            .map_err(|source| ManifestError::Write {
                path: temp_path.clone(),
                source,
            })?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|source| ManifestError::Write {
                path: self.path.clone(),
                source,
            })?;

        debug!("Saved manifest {}", self.path.display());
        Ok(())
    }
}
