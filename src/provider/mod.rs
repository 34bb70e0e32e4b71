//! Managing generated Go files on disk
//!
//! The provider layer connects the generation backend to the filesystem:
//!
//! - [`ProviderConfig`] decides where files live (the base directory)
//! - [`SourceStore`] reads, writes, and removes files under that directory
//! - [`GoSourceResource`] creates, refreshes, updates, deletes, and plans one generated file
//! - [`GoSourceDataSource`] reads an existing file without managing it

mod config;
mod errors;
mod resource;
mod store;

pub use config::{BASE_DIR_ENV, ProviderConfig};
pub use errors::ProviderError;
pub use resource::{GoSourceDataSource, GoSourceResource, GoSourceState, PlanOutcome};
pub use store::SourceStore;
