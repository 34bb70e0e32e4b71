//! Provide shared, pure vocabulary for the caiac Go source generator.
//!
//! This crate is small and dependency-free. It holds the tables that both the translator (reading
//! declarative trees) and the renderer (emitting Go) need to agree on:
//! - Go reserved keywords and identifier rules, and
//! - the discriminator spellings accepted for expression, statement, and literal kinds.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no IR types.

pub mod lang;
