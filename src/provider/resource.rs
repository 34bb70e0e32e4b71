//! The `go_source` resource and data source.
//!
//! A resource owns one generated file: it renders the declarative tree, writes the result through the
//! [`SourceStore`], and tracks the filename and contents as [`GoSourceState`]. The data source only reads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ProviderConfig, ProviderError, SourceStore};
use crate::backend::GoCodegen;
use crate::format;

/// Tracked state of a generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoSourceState {
    pub filename: String,
    pub contents: String,
}

/// What applying a declarative tree to a file would do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// The file does not exist yet and would be written with `contents`
    Create { contents: String },
    /// The file exists with different contents
    Update { diff: String },
    NoChange,
}

#[derive(Debug, Clone)]
pub struct GoSourceResource {
    store: SourceStore,
    codegen: GoCodegen,
}

impl GoSourceResource {
    pub fn new(store: SourceStore) -> Self {
        Self {
            store,
            codegen: GoCodegen::new(),
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(SourceStore::new(&config.base_dir))
    }

    pub fn with_codegen(mut self, codegen: GoCodegen) -> Self {
        self.codegen = codegen;
        self
    }

    pub fn store(&self) -> &SourceStore {
        &self.store
    }

    /// Render the tree and write it to `filename`.
    #[tracing::instrument(skip(self, tree))]
    pub fn create(&self, filename: &str, tree: &Value) -> Result<GoSourceState, ProviderError> {
        let contents = self.codegen.try_generate(tree)?;
        self.store.write(filename, &contents)?;
        Ok(GoSourceState {
            filename: filename.to_string(),
            contents,
        })
    }

    /// Refresh `contents` from disk.
    #[tracing::instrument(skip(self, state), fields(filename = %state.filename))]
    pub fn read(&self, state: &GoSourceState) -> Result<GoSourceState, ProviderError> {
        Ok(GoSourceState {
            filename: state.filename.clone(),
            contents: self.store.read(&state.filename)?,
        })
    }

    /// Render the tree and write it unless the file already holds exactly that text.
    #[tracing::instrument(skip(self, tree))]
    pub fn update(&self, filename: &str, tree: &Value) -> Result<GoSourceState, ProviderError> {
        let contents = self.codegen.try_generate(tree)?;
        if self.store.read_existing(filename)?.as_deref() == Some(contents.as_str()) {
            tracing::debug!("contents unchanged, skipping write");
        } else {
            self.store.write(filename, &contents)?;
        }
        Ok(GoSourceState {
            filename: filename.to_string(),
            contents,
        })
    }

    /// Remove the file and any directories it leaves empty.
    #[tracing::instrument(skip(self, state), fields(filename = %state.filename))]
    pub fn delete(&self, state: &GoSourceState) -> Result<(), ProviderError> {
        self.store.remove(&state.filename)
    }

    /// Compare the rendered tree with what is on disk.
    #[tracing::instrument(skip(self, tree))]
    pub fn plan(&self, filename: &str, tree: &Value) -> Result<PlanOutcome, ProviderError> {
        let desired = self.codegen.try_generate(tree)?;
        self.compare(filename, &desired)
    }

    /// Render the tree once, then create or rewrite the file if it differs. Returns the new state along with the
    /// outcome that was acted on.
    #[tracing::instrument(skip(self, tree))]
    pub fn apply(&self, filename: &str, tree: &Value) -> Result<(GoSourceState, PlanOutcome), ProviderError> {
        let contents = self.codegen.try_generate(tree)?;
        let outcome = self.compare(filename, &contents)?;
        if outcome == PlanOutcome::NoChange {
            tracing::debug!("contents unchanged, skipping write");
        } else {
            self.store.write(filename, &contents)?;
        }
        let state = GoSourceState {
            filename: filename.to_string(),
            contents,
        };
        Ok((state, outcome))
    }

    fn compare(&self, filename: &str, desired: &str) -> Result<PlanOutcome, ProviderError> {
        let outcome = match self.store.read_existing(filename)? {
            None => PlanOutcome::Create {
                contents: desired.to_string(),
            },
            Some(current) => match format::format_diff(&current, desired) {
                Some(diff) => PlanOutcome::Update { diff },
                None => PlanOutcome::NoChange,
            },
        };
        Ok(outcome)
    }
}

/// Read-only view of a file on disk.
#[derive(Debug, Clone)]
pub struct GoSourceDataSource {
    store: SourceStore,
}

impl GoSourceDataSource {
    pub fn new(store: SourceStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(SourceStore::new(&config.base_dir))
    }

    #[tracing::instrument(skip(self))]
    pub fn read(&self, filename: &str) -> Result<GoSourceState, ProviderError> {
        tracing::debug!(path = %self.store.resolve(filename).display(), "reading file");
        Ok(GoSourceState {
            filename: filename.to_string(),
            contents: self.store.read(filename)?,
        })
    }
}
