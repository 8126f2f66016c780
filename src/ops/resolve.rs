//! Locating the project root.
//!
//! Walks from a start directory toward the filesystem root and stops at the
//! first directory whose listing contains `package.json`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::manifest::MANIFEST_FILE;
use crate::util::fs::list_dir;

/// Error while walking up the directory tree.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to resolve start directory {}", path.display())]
    Absolute {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A directory containing a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDir {
    root: PathBuf,
    listing: Vec<String>,
}

impl ProjectDir {
    /// The directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File names in the directory, as read during the walk.
    pub fn listing(&self) -> &[String] {
        &self.listing
    }

    /// Path to the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }
}

/// Result of a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nearest ancestor (or the start itself) with a manifest.
    Found(ProjectDir),
    /// Reached the filesystem root without finding a manifest.
    NotFound { start: PathBuf },
}

/// Find the nearest directory at or above `start` that contains `package.json`.
///
/// `on_visit` is called with each candidate before it is read. Relative start
/// paths are made absolute against the process working directory; symlinks are
/// left alone.
pub fn resolve(start: &Path, on_visit: impl FnMut(&Path)) -> Result<Resolution, ResolveError> {
    resolve_with(start, list_dir, on_visit)
}

/// [`resolve`] with a caller-supplied directory listing.
///
/// `list` returns the file names in one directory. The walk ends at the first
/// listing that holds `package.json`, or after the candidate with no parent.
pub fn resolve_with(
    start: &Path,
    mut list: impl FnMut(&Path) -> io::Result<Vec<String>>,
    mut on_visit: impl FnMut(&Path),
) -> Result<Resolution, ResolveError> {
    let start = std::path::absolute(start).map_err(|source| ResolveError::Absolute {
        path: start.to_path_buf(),
        source,
    })?;

    let mut current = start.clone();
    loop {
        on_visit(&current);
        tracing::debug!("searching {}", current.display());

        let listing = list(&current).map_err(|source| ResolveError::ReadDir {
            path: current.clone(),
            source,
        })?;

        if listing.iter().any(|name| name == MANIFEST_FILE) {
            tracing::debug!("found {} in {}", MANIFEST_FILE, current.display());
            return Ok(Resolution::Found(ProjectDir {
                root: current,
                listing,
            }));
        }

        if !current.pop() {
            tracing::debug!("reached filesystem root from {}", start.display());
            return Ok(Resolution::NotFound { start });
        }
    }
}
