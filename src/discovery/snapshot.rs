//! Point-in-time listing of every file below the watch root.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{AuditError, Result};

/// Set of file paths relative to the watch root.
///
/// Paths keep their raw OS names so every member can be opened again by
/// joining it onto the root. Directories are never members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    paths: BTreeSet<PathBuf>,
}

impl Snapshot {
    pub fn from_paths(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.paths.contains(path.as_ref())
    }

    /// Paths present here but not in `previous`, in sorted order.
    ///
    /// Removals and in-place modifications are not represented.
    pub fn added_since(&self, previous: &Snapshot) -> Vec<PathBuf> {
        self.paths.difference(&previous.paths).cloned().collect()
    }
}

/// `/`-separated text form of a relative path, for reports and logs.
///
/// Names that are not valid UTF-8 are rendered lossily.
pub fn display_key(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Enumerates a directory tree into a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct Snapshotter {
    root: PathBuf,
}

impl Snapshotter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walk the whole tree.
    ///
    /// Fails with [`AuditError::DirectoryAccess`] only when the root itself is
    /// missing, not a directory, or unreadable. Entries that disappear or
    /// cannot be read further down are skipped.
    pub fn take(&self) -> Result<Snapshot> {
        let metadata = fs::metadata(&self.root)
            .map_err(|e| AuditError::directory_access(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(AuditError::directory_access(
                &self.root,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }
        fs::read_dir(&self.root).map_err(|e| AuditError::directory_access(&self.root, e))?;

        let mut paths = BTreeSet::new();
        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(AuditError::directory_access(&self.root, io::Error::from(e)));
                }
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !is_file_entry(&entry) {
                continue;
            }

            if let Some(relative) = relative_path(&self.root, entry.path()) {
                paths.insert(relative);
            }
        }

        Ok(Snapshot { paths })
    }
}

fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Path below the root, independent of where the root lives.
fn relative_path(root: &Path, path: &Path) -> Option<PathBuf> {
    let relative: PathBuf = path
        .strip_prefix(root)
        .ok()?
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect();
    if relative.as_os_str().is_empty() {
        return None;
    }
    Some(relative)
}
