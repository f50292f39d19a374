//! Typed stack values returned by read-only queries
//!
//! A query against the external provider yields an ordered sequence of
//! typed entries consumed front-to-back in a schema-defined order. Decoding
//! is positional, not name-addressed, so the value carries its runtime kind
//! for mismatch diagnostics.

use crate::cell::Cell;
use std::sync::Arc;

/// One entry of a query-result stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackValue {
    /// Integer entry (booleans and counters arrive as integers)
    Int(i128),
    /// Cell entry (code cells, state cells, address-bearing slices)
    Cell(Arc<Cell>),
    /// Explicit null entry
    Null,
}

impl StackValue {
    /// Runtime kind name, used in schema-mismatch diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            StackValue::Int(_) => "int",
            StackValue::Cell(_) => "cell",
            StackValue::Null => "null",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(StackValue::Int(1).kind(), "int");
        assert_eq!(StackValue::Cell(Cell::empty()).kind(), "cell");
        assert_eq!(StackValue::Null.kind(), "null");
    }
}
