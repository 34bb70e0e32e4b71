//! Provider configuration.

use std::env;
use std::path::{Path, PathBuf};

use super::ProviderError;

/// Environment variable consulted when no base directory is given explicitly.
pub const BASE_DIR_ENV: &str = "CAIAC_BASE_DIR";

/// Settings shared by the resource and the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Directory that relative filenames are resolved against.
    pub base_dir: PathBuf,
}

impl ProviderConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve the base directory: the explicit value, then `CAIAC_BASE_DIR`, then the working directory.
    ///
    /// Empty values count as unset.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ProviderError> {
        let from_env = env::var_os(BASE_DIR_ENV).map(PathBuf::from);
        Self::resolve_with(explicit, from_env.as_deref())
    }

    fn resolve_with(explicit: Option<&Path>, from_env: Option<&Path>) -> Result<Self, ProviderError> {
        let chosen = [explicit, from_env]
            .into_iter()
            .flatten()
            .find(|dir| !dir.as_os_str().is_empty());

        let base_dir = match chosen {
            Some(dir) => dir.to_path_buf(),
            None => env::current_dir().map_err(ProviderError::io("determine the working directory", "."))?,
        };

        tracing::debug!(base_dir = %base_dir.display(), "resolved base directory");
        Ok(Self { base_dir })
    }
}
