use crate::clock::Clock;
use crate::manifest::{MANIFEST_FILE_NAME, ManifestError, PackageManifest};
use crate::nightly::nightly_version;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Result of stamping one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub manifest_path: PathBuf,
    pub previous_version: String,
    pub nightly_version: String,
    /// False when the manifest already carried today's nightly version.
    pub changed: bool,
}

/// Manifest text after the version substitution, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampedManifest {
    pub contents: String,
    pub previous_version: String,
    pub nightly_version: String,
}

pub struct VersionPatcher<C: Clock> {
    clock: C,
}

impl<C: Clock> VersionPatcher<C> {
    pub fn new(clock: C) -> Self {
        VersionPatcher { clock }
    }

    pub fn manifest_path(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(MANIFEST_FILE_NAME)
    }

    /// Rewrites `{dir}/package.json` in place with a nightly version for today.
    pub fn patch(&self, dir: impl AsRef<Path>) -> Result<PatchOutcome, ManifestError> {
        let path = Self::manifest_path(dir);
        debug!("Reading manifest: '{}'", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|source| ManifestError::Read {
            path: path.clone(),
            source,
        })?;

        let stamped = self.stamp(&contents, &path)?;
        let changed = stamped.contents != contents;

        std::fs::write(&path, &stamped.contents).map_err(|source| ManifestError::Write {
            path: path.clone(),
            source,
        })?;
        info!(
            "Updated '{}' from {} -> {}",
            path.display(),
            stamped.previous_version,
            stamped.nightly_version
        );

        Ok(PatchOutcome {
            manifest_path: path,
            previous_version: stamped.previous_version,
            nightly_version: stamped.nightly_version,
            changed,
        })
    }

    /// Substitutes the first occurrence of the current version in `contents`.
    ///
    /// The replacement is textual: whatever literally matches the version
    /// string first wins, even if it belongs to an earlier unrelated field.
    /// That case is reported with a warning but still applied.
    pub fn stamp(&self, contents: &str, path: &Path) -> Result<StampedManifest, ManifestError> {
        let mut manifest = PackageManifest::parse(contents, path)?;
        let previous_version = manifest.version(path)?;
        let today = self.clock.today();
        let nightly = nightly_version(&previous_version, today);
        debug!(
            "Current version: {}, stamping with date {}",
            previous_version,
            today.format("%Y-%m-%d")
        );

        manifest.set_version(nightly.clone());

        if !contents.contains(previous_version.as_str()) {
            return Err(ManifestError::VersionNotInText {
                path: path.to_path_buf(),
                version: previous_version,
            });
        }
        let new_contents = contents.replacen(previous_version.as_str(), &nightly, 1);

        let written = PackageManifest::parse(&new_contents, path).map_err(|err| match err {
            ManifestError::Parse { path, source } => ManifestError::CorruptedRewrite { path, source },
            other => other,
        })?;
        if written.version(path).ok() != manifest.version(path).ok() {
            warn!(
                "The first occurrence of '{}' in '{}' is not the \"version\" field; \
                 the manifest version was left unchanged",
                previous_version,
                path.display()
            );
        }

        Ok(StampedManifest {
            contents: new_contents,
            previous_version,
            nightly_version: nightly,
        })
    }
}
