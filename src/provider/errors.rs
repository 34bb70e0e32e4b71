//! Errors raised while managing generated files on disk.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::backend::GenerationError;

/// Error from a provider operation.
#[derive(Debug, Error, Diagnostic)]
pub enum ProviderError {
    /// The declarative tree could not be turned into Go source
    #[error(transparent)]
    #[diagnostic(transparent)]
    Generation(#[from] GenerationError),

    /// A filesystem operation failed
    #[error("unable to {action} `{}`", path.display())]
    #[diagnostic(code(caiac::provider::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ProviderError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| ProviderError::Io { action, path, source }
    }

    /// Whether this is an I/O error for a file or directory that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
