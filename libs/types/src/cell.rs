//! # Cell - Immutable Bits-and-References Tree Node
//!
//! ## Purpose
//!
//! The fundamental unit of the wire format: an immutable, finalized node
//! holding an ordered bit payload (up to 1023 bits) and up to four owned
//! child cells. Configuration state and operation messages are both encoded
//! as trees of these nodes, and the tree's root hash is what the ledger
//! addresses.
//!
//! ## Architecture Role
//!
//! ```text
//! codec::CellBuilder → [Cell] → external provider (init data / message body)
//!        ↑                ↓
//!   accumulates      content-addressed,
//!   bits + refs      Arc-shared, read-only
//! ```
//!
//! Cells are never mutated after construction and never form cycles
//! (children must exist before their parent), so plain `Arc` ownership is
//! enough - no reference counting games, no interior mutability beyond the
//! lazily computed hash.

use crate::error::{CellError, CellResult};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Maximum number of data bits a single cell may hold
pub const MAX_BITS: usize = 1023;

/// Maximum number of child references a single cell may hold
pub const MAX_REFS: usize = 4;

/// Immutable, finalized cell node
///
/// Bits are packed most-significant-first into `data`; only the first
/// `bit_len` bits are meaningful. Both capacity invariants are enforced by
/// the sole constructor, so every `Cell` in existence is well-formed.
pub struct Cell {
    data: Vec<u8>,
    bit_len: usize,
    refs: Vec<Arc<Cell>>,
    hash: OnceLock<[u8; 32]>,
}

impl Cell {
    /// Construct a cell, enforcing the bit and ref capacity invariants
    ///
    /// `data` must hold at least `bit_len` bits; trailing bits of the final
    /// byte beyond `bit_len` are ignored (the builder always leaves them
    /// zero so hashing stays canonical).
    pub fn try_new(data: Vec<u8>, bit_len: usize, refs: Vec<Arc<Cell>>) -> CellResult<Self> {
        if bit_len > MAX_BITS {
            return Err(CellError::CapacityExceeded {
                used: bit_len,
                requested: 0,
                limit: MAX_BITS,
            });
        }
        if refs.len() > MAX_REFS {
            return Err(CellError::TooManyRefs {
                refs: refs.len(),
                limit: MAX_REFS,
            });
        }
        debug_assert!(data.len() * 8 >= bit_len, "data shorter than bit_len");
        Ok(Self {
            data,
            bit_len,
            refs,
            hash: OnceLock::new(),
        })
    }

    /// The empty cell: zero bits, zero refs
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            data: Vec::new(),
            bit_len: 0,
            refs: Vec::new(),
            hash: OnceLock::new(),
        })
    }

    /// Number of data bits in this cell
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Packed bit payload (most-significant bit first within each byte)
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Child references, in insertion order
    pub fn refs(&self) -> &[Arc<Cell>] {
        &self.refs
    }

    /// Read a single bit by index, `None` past the end
    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let byte = self.data[index / 8];
        Some(byte & (0x80 >> (index % 8)) != 0)
    }

    /// Content-addressing hash of this cell
    ///
    /// SHA-256 over the canonical form: `bit_len` as big-endian u16, the
    /// padded data bytes, the ref count, then each child's hash in order.
    /// Equal trees hash equal; any change to a bit, a field order, or a ref
    /// position produces a different hash. Computed once and cached.
    pub fn repr_hash(&self) -> [u8; 32] {
        *self.hash.get_or_init(|| {
            let mut hasher = Sha256::new();
            hasher.update((self.bit_len as u16).to_be_bytes());
            hasher.update(&self.data);
            hasher.update([self.refs.len() as u8]);
            for child in &self.refs {
                hasher.update(child.repr_hash());
            }
            hasher.finalize().into()
        })
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.repr_hash() == other.repr_hash()
    }
}

impl Eq for Cell {}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("bit_len", &self.bit_len)
            .field("data", &hex::encode(&self.data))
            .field("refs", &self.refs.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(data: Vec<u8>, bit_len: usize) -> Arc<Cell> {
        Arc::new(Cell::try_new(data, bit_len, Vec::new()).unwrap())
    }

    #[test]
    fn test_capacity_invariants() {
        assert!(Cell::try_new(vec![0u8; 128], 1023, Vec::new()).is_ok());
        let err = Cell::try_new(vec![0u8; 128], 1024, Vec::new()).unwrap_err();
        assert!(matches!(err, CellError::CapacityExceeded { limit: 1023, .. }));

        let children: Vec<_> = (0..5).map(|i| leaf(vec![i], 8)).collect();
        let err = Cell::try_new(Vec::new(), 0, children).unwrap_err();
        assert!(matches!(err, CellError::TooManyRefs { refs: 5, limit: 4 }));
    }

    #[test]
    fn test_bit_indexing() {
        let cell = leaf(vec![0b1010_0000], 4);
        assert_eq!(cell.bit(0), Some(true));
        assert_eq!(cell.bit(1), Some(false));
        assert_eq!(cell.bit(2), Some(true));
        assert_eq!(cell.bit(3), Some(false));
        assert_eq!(cell.bit(4), None);
    }

    #[test]
    fn test_repr_hash_is_structural() {
        let a = leaf(vec![0xAB], 8);
        let b = leaf(vec![0xAB], 8);
        assert_eq!(a.repr_hash(), b.repr_hash());
        assert_eq!(a, b);

        // Same bytes, different bit length: distinct cells
        let c = leaf(vec![0xAB], 7);
        assert_ne!(a.repr_hash(), c.repr_hash());
    }

    #[test]
    fn test_repr_hash_covers_ref_order() {
        let x = leaf(vec![0x01], 8);
        let y = leaf(vec![0x02], 8);
        let xy = Cell::try_new(Vec::new(), 0, vec![x.clone(), y.clone()]).unwrap();
        let yx = Cell::try_new(Vec::new(), 0, vec![y, x]).unwrap();
        assert_ne!(xy.repr_hash(), yx.repr_hash());
    }

    #[test]
    fn test_empty_cell() {
        let empty = Cell::empty();
        assert_eq!(empty.bit_len(), 0);
        assert!(empty.refs().is_empty());
        assert_eq!(empty.repr_hash(), Cell::empty().repr_hash());
    }
}
