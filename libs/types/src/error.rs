//! Construction and decoding errors for the cell layer
//!
//! Every failure is surfaced distinctly by kind so callers can tell
//! "my config is malformed" apart from "the ledger returned an unexpected
//! shape". All variants are local, non-recoverable errors: retrying a
//! malformed encode cannot succeed without changing inputs, so there is no
//! recovery or fallback path anywhere in the codec.

use thiserror::Error;

/// Cell construction and decoding errors with diagnostic context
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CellError {
    /// Appending would push the builder past the 1023-bit budget
    #[error("cell capacity exceeded: {used} bits used, {requested} more requested (limit {limit})")]
    CapacityExceeded {
        used: usize,
        requested: usize,
        limit: usize,
    },

    /// A fifth child reference was attempted on one cell
    #[error("too many refs: cell already holds {refs} of {limit} child references")]
    TooManyRefs { refs: usize, limit: usize },

    /// Write or second finalize after `end_cell`
    #[error("builder already finalized: no further writes are allowed")]
    BuilderFinalized,

    /// Integer value does not fit the declared bit width
    #[error("value {value:#x} out of range for {width}-bit field")]
    OutOfRange { value: u128, width: u32 },

    /// Decoder found a different shape than the schema demands
    #[error("schema mismatch at position {position}: expected {expected}, got {got}")]
    SchemaMismatch {
        position: usize,
        expected: String,
        got: String,
    },
}

impl CellError {
    /// Build a SchemaMismatch with positional context
    pub fn schema_mismatch(
        position: usize,
        expected: impl Into<String>,
        got: impl Into<String>,
    ) -> Self {
        Self::SchemaMismatch {
            position,
            expected: expected.into(),
            got: got.into(),
        }
    }
}

/// Result type for cell construction and decoding
pub type CellResult<T> = std::result::Result<T, CellError>;
