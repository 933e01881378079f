//! Dependency root resolution
//!
//! Turns the configured `YOUTUNE_ROOT` into a canonical directory and builds
//! the search path the package runtime is started with.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::error::RootError;

/// Canonical, existing directory holding the external package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRoot {
    path: PathBuf,
}

impl PackageRoot {
    /// Expand `~`, canonicalise, and check that `raw` is a directory
    pub fn resolve(raw: &Path) -> Result<Self, RootError> {
        let expanded = expand_home(raw)?;

        let path = match expanded.canonicalize() {
            Ok(path) => path,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(RootError::NotFound(absolute(&expanded)));
            }
            Err(e) => {
                return Err(RootError::Inaccessible {
                    path: absolute(&expanded),
                    message: e.to_string(),
                });
            }
        };

        if !path.is_dir() {
            return Err(RootError::NotADirectory(path));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a `PYTHONPATH` value led by this root.
    ///
    /// Any existing occurrence of the root is dropped first so repeated
    /// builds never list it twice. Empty entries are dropped as well.
    pub fn search_path(&self, existing: Option<&OsStr>) -> Result<OsString, RootError> {
        let rest = existing
            .map(|value| env::split_paths(value).collect::<Vec<_>>())
            .unwrap_or_default()
            .into_iter()
            .filter(|entry| !entry.as_os_str().is_empty() && entry != &self.path);

        env::join_paths(std::iter::once(self.path.clone()).chain(rest))
            .map_err(|_| RootError::Unjoinable(self.path.clone()))
    }
}

/// Replace a leading `~` component with the home directory
fn expand_home(raw: &Path) -> Result<PathBuf, RootError> {
    let mut components = raw.components();
    match components.next() {
        Some(first) if first.as_os_str() == "~" => {
            let home = dirs::home_dir().ok_or(RootError::NoHomeDirectory)?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(raw.to_path_buf()),
    }
}

/// Best-effort absolute form of a path that may not exist, for error messages
fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
