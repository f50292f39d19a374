//! Account address type
//!
//! A canonical two-part value: the signed workchain id and the 256-bit
//! account hash. Absent ("null") addresses are a legitimate wire value and
//! are modeled as `Option<MsgAddress>` at every API surface, never as a
//! sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from parsing a textual address fixture
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AddressParseError {
    #[error("invalid hex in address hash: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("address hash must be 32 bytes, got {0}")]
    BadLength(usize),
}

/// Workchain id plus 256-bit account hash
///
/// Compared by exact equality; cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MsgAddress {
    pub workchain: i8,
    pub hash: [u8; 32],
}

impl MsgAddress {
    pub fn new(workchain: i8, hash: [u8; 32]) -> Self {
        Self { workchain, hash }
    }

    /// Parse the hash part from a 64-character hex string
    pub fn from_hex_hash(workchain: i8, hash_hex: &str) -> Result<Self, AddressParseError> {
        let bytes = hex::decode(hash_hex)?;
        let hash: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressParseError::BadLength(bytes.len()))?;
        Ok(Self { workchain, hash })
    }
}

impl fmt::Display for MsgAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.workchain, hex::encode(self.hash))
    }
}
