//! File storage rooted at a base directory.
//!
//! Writes are atomic: contents go to a temporary file in the destination directory, which is then renamed over the
//! target. Removing a file also removes the directories it leaves empty, up to (never including) the base directory.
//! The walk works on lexically normalized paths, so a filename that climbs out with `..` never empties anything
//! outside the base directory.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

use super::ProviderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStore {
    base_dir: PathBuf,
}

impl SourceStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Path of `filename`. Relative names are joined to the base directory; absolute names are kept.
    pub fn resolve(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(filename)
    }

    /// Write `contents` to `filename`, creating missing parent directories. Returns the resolved path.
    #[tracing::instrument(skip(self, contents), fields(bytes = contents.len()))]
    pub fn write(&self, filename: &str, contents: &str) -> Result<PathBuf, ProviderError> {
        let path = self.resolve(filename);
        let dir = path.parent().unwrap_or(self.base_dir.as_path()).to_path_buf();

        fs::create_dir_all(&dir).map_err(ProviderError::io("create directory", &dir))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(ProviderError::io("create temporary file in", &dir))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(ProviderError::io("write", &path))?;
        set_source_permissions(tmp.as_file()).map_err(ProviderError::io("set permissions on", &path))?;
        tmp.persist(&path).map_err(|e| ProviderError::io("replace", &path)(e.error))?;

        tracing::debug!(path = %path.display(), "wrote file");
        Ok(path)
    }

    pub fn read(&self, filename: &str) -> Result<String, ProviderError> {
        let path = self.resolve(filename);
        fs::read_to_string(&path).map_err(ProviderError::io("read", &path))
    }

    /// Like [`SourceStore::read`], but a missing file is `None`.
    pub fn read_existing(&self, filename: &str) -> Result<Option<String>, ProviderError> {
        match self.read(filename) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Delete `filename`, then every ancestor directory left empty, stopping at the base directory.
    #[tracing::instrument(skip(self))]
    pub fn remove(&self, filename: &str) -> Result<(), ProviderError> {
        let path = self.resolve(filename);
        fs::remove_file(&path).map_err(ProviderError::io("remove", &path))?;

        let base = normalize(&self.base_dir);
        let resolved = normalize(&path);
        let Some(relative) = resolved.strip_prefix(&base).ok().and_then(Path::parent) else {
            return Ok(());
        };
        if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            tracing::debug!(path = %resolved.display(), "outside base directory, skipping empty-dir removal");
            return Ok(());
        }

        for dir in relative.ancestors().filter(|d| !d.as_os_str().is_empty()) {
            let current = base.join(dir);
            tracing::debug!(dir = %current.display(), "empty-dir removal loop");

            let mut entries = fs::read_dir(&current).map_err(ProviderError::io("list directory", &current))?;
            if entries.next().is_some() {
                break;
            }
            fs::remove_dir(&current).map_err(ProviderError::io("remove empty directory", &current))?;
        }
        Ok(())
    }
}

/// Drop `.` components and fold `..` into the preceding normal component, without touching the filesystem.
/// Leading `..` components of a relative path are kept.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

#[cfg(unix)]
fn set_source_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_source_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
