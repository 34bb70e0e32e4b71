//! Go language vocabulary registries.
//!
//! Callers work with stable IDs (e.g. [`kinds::ExprKindId`]) and look up spellings via registry tables instead of
//! scattering string comparisons across the translator and renderer.
//!
//! ## Notes
//! - Registries are **pure**: no IR types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use caiac_core::lang::kinds::{self, ExprKindId};
//!
//! assert_eq!(kinds::expr_kind_from_str("call"), Some(ExprKindId::Call));
//! assert_eq!(kinds::expr_kind_as_str(ExprKindId::Call), "call");
//! ```

pub mod idents;
pub mod keywords;
pub mod kinds;
