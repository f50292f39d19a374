//! Codec error types
//!
//! The error taxonomy is defined next to the `Cell` type whose invariants
//! it names (`types::error`); this module re-exports it so codec callers
//! have a single import path for rules-layer failures.

pub use types::error::{CellError, CellResult};
