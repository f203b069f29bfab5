//! The subset of `package.json` that drives file selection.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ManifestError;

/// File name of the package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// Package manifest fields consulted when selecting files.
///
/// Unknown fields are ignored. `bundledDependencies` is accepted as an alias
/// of `bundleDependencies`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Package name, possibly scoped (`@scope/name`).
    #[serde(default)]
    pub name: Option<String>,
    /// Package version.
    #[serde(default)]
    pub version: Option<String>,
    /// Explicit allow-list of files and directories.
    #[serde(default)]
    pub files: Option<Vec<String>>,
    /// Entry point, always shipped when declared.
    #[serde(default)]
    pub main: Option<String>,
    /// Dependencies whose installed folders are shipped.
    #[serde(default, alias = "bundledDependencies")]
    pub bundle_dependencies: Option<Vec<String>>,
}

impl Manifest {
    /// Parses manifest JSON text.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `text` is not a manifest object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reads `package.json` from the package root.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] when the file cannot be read and
    /// [`ManifestError::Parse`] when it is not valid.
    pub fn load(root: &Path) -> Result<Self, ManifestError> {
        let path = root.join(MANIFEST_FILE);
        let text = fs::read_to_string(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ManifestError::Parse { path, source })
    }

    /// Returns the package name and version required for publishing.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::MissingField`] when either is absent or blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use engine::Manifest;
    ///
    /// let manifest = Manifest::from_json(r#"{"name":"demo","version":"1.0.0"}"#).unwrap();
    /// assert_eq!(manifest.require_identity().unwrap(), ("demo", "1.0.0"));
    ///
    /// let unnamed = Manifest::from_json(r#"{"version":"1.0.0"}"#).unwrap();
    /// assert!(unnamed.require_identity().is_err());
    /// ```
    pub fn require_identity(&self) -> Result<(&str, &str), ManifestError> {
        let name = non_blank(self.name.as_deref()).ok_or(ManifestError::MissingField("name"))?;
        let version =
            non_blank(self.version.as_deref()).ok_or(ManifestError::MissingField("version"))?;
        Ok((name, version))
    }

    /// `files` entries with leading `./` and trailing `/` removed.
    pub(crate) fn allow_list(&self) -> Option<Vec<String>> {
        self.files
            .as_ref()
            .map(|files| files.iter().filter_map(|entry| normalize_entry(entry)).collect())
    }

    /// `main` with leading `./` removed.
    pub(crate) fn entry_point(&self) -> Option<String> {
        self.main.as_deref().and_then(normalize_entry)
    }

    /// Declared bundled dependency names, ignoring blank entries.
    pub(crate) fn bundled(&self) -> Option<Vec<&str>> {
        self.bundle_dependencies.as_ref().map(|names| {
            names
                .iter()
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .collect()
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn normalize_entry(entry: &str) -> Option<String> {
    let mut entry = entry.trim();
    while let Some(rest) = entry.strip_prefix("./") {
        entry = rest;
    }
    let entry = entry.trim_end_matches('/');
    (!entry.is_empty() && entry != ".").then(|| entry.to_owned())
}
