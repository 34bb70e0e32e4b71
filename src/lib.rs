#![forbid(unsafe_code)]
//! caiac: declarative Go source generation
//!
//! This crate turns a declarative description of a Go source file (a JSON tree) into canonically formatted Go text,
//! and manages the generated files on disk.
//!
//! - `backend`: translation of the declarative tree to a typed IR, and rendering of the IR to a Go syntax tree
//! - `format`: gofmt-style printing of the syntax tree, plus line diffs
//! - `provider`: create/read/update/delete/plan of generated files under a base directory
//! - `cli`: the `caiac` command-line driver
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod format;
pub mod provider;

pub use backend::{GenerationError, GoCodegen, generate};
pub use format::format_diff;
pub use provider::{GoSourceDataSource, GoSourceResource, ProviderConfig, ProviderError, SourceStore};
