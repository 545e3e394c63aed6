use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MANIFEST_FILE_NAME: &str = "package.json";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write manifest '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Manifest '{}' could not be parsed", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Rewriting '{}' would produce invalid JSON", path.display())]
    CorruptedRewrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Manifest '{}' has no \"version\" field", path.display())]
    MissingVersion { path: PathBuf },
    #[error("Manifest '{}' has an unusable \"version\" value: {found}", path.display())]
    InvalidVersion { path: PathBuf, found: String },
    #[error("Version '{version}' does not appear verbatim in '{}'", path.display())]
    VersionNotInText { path: PathBuf, version: String },
}

/// Typed view over `package.json`.
///
/// Only `version` is interpreted. Every other top-level key is carried in
/// `fields` in its original order so the document can be serialized again
/// without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<Value>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl PackageManifest {
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ManifestError> {
        serde_json::from_str(contents).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The `version` value as text.
    ///
    /// Only a non-empty JSON string qualifies. A bare number is rejected since
    /// appending a pre-release suffix to it cannot yield valid JSON.
    pub fn version(&self, path: &Path) -> Result<String, ManifestError> {
        let invalid = |found: String| ManifestError::InvalidVersion {
            path: path.to_path_buf(),
            found,
        };
        match &self.version {
            None => Err(ManifestError::MissingVersion {
                path: path.to_path_buf(),
            }),
            Some(Value::String(s)) if s.is_empty() => Err(invalid("empty string".to_string())),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(invalid(other.to_string())),
        }
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(Value::String(version.into()));
    }

    /// Any top-level key other than `version`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serializes the view with unknown keys in their original order.
    /// The patcher never writes this to disk; it rewrites the raw text instead.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
