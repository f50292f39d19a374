//! # Cell Builder - Bit-Level Message Construction
//!
//! ## Purpose
//!
//! Mutable, single-owner accumulator of bits and child-cell slots. Every
//! schema in this codec - the router config cell, the transfer envelope,
//! the forward payloads - is written through this builder, so the append
//! order here IS the wire contract and must match the reader exactly.
//!
//! ## Architecture
//!
//! ```text
//! Schemas → [CellBuilder] → immutable Cell tree → external provider
//!    ↑            ↓                  ↓
//! Typed      bit packing        Arc-shared,
//! fields     + capacity         content-addressed
//!            enforcement
//! ```
//!
//! Builders are pure: identical input sequences always produce
//! bit-identical cells, which is what makes downstream hashes and contract
//! addresses deterministic. Every append validates capacity before writing
//! a single bit, so a failed call leaves the builder unchanged.

use crate::coins;
use types::cell::{Cell, MAX_BITS, MAX_REFS};
use types::error::{CellError, CellResult};
use types::MsgAddress;
use std::sync::Arc;

/// Accumulates bits and child references, finalized once into a `Cell`
///
/// After `end_cell` the builder is invalid for further writes; every later
/// call fails with `BuilderFinalized`.
#[derive(Debug, Default)]
pub struct CellBuilder {
    data: Vec<u8>,
    bit_len: usize,
    refs: Vec<Arc<Cell>>,
    finalized: bool,
}

impl CellBuilder {
    /// Empty builder: zero bits, zero refs
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Number of child references stored so far
    pub fn ref_count(&self) -> usize {
        self.refs.len()
    }

    pub(crate) fn ensure_writable(&self) -> CellResult<()> {
        if self.finalized {
            Err(CellError::BuilderFinalized)
        } else {
            Ok(())
        }
    }

    pub(crate) fn ensure_capacity(&self, extra_bits: usize) -> CellResult<()> {
        if self.bit_len + extra_bits > MAX_BITS {
            Err(CellError::CapacityExceeded {
                used: self.bit_len,
                requested: extra_bits,
                limit: MAX_BITS,
            })
        } else {
            Ok(())
        }
    }

    // Infallible append primitives; capacity must already be checked.

    fn push_bit(&mut self, bit: bool) {
        if self.bit_len % 8 == 0 {
            self.data.push(0);
        }
        if bit {
            self.data[self.bit_len / 8] |= 0x80 >> (self.bit_len % 8);
        }
        self.bit_len += 1;
    }

    pub(crate) fn push_uint(&mut self, value: u128, width: u32) {
        for i in (0..width).rev() {
            self.push_bit(value >> i & 1 == 1);
        }
    }

    fn push_slice(&mut self, bytes: &[u8]) {
        if self.bit_len % 8 == 0 {
            self.data.extend_from_slice(bytes);
            self.bit_len += bytes.len() * 8;
        } else {
            for &byte in bytes {
                self.push_uint(byte as u128, 8);
            }
        }
    }

    /// Append a single bit
    pub fn store_bit(&mut self, bit: bool) -> CellResult<&mut Self> {
        self.ensure_writable()?;
        self.ensure_capacity(1)?;
        self.push_bit(bit);
        Ok(self)
    }

    /// Append `width` bits of `value`, big-endian
    ///
    /// `width` may be 0..=128; values outside `[0, 2^width)` fail with
    /// `OutOfRange`.
    pub fn store_uint(&mut self, value: u128, width: u32) -> CellResult<&mut Self> {
        self.ensure_writable()?;
        if width > 128 || (width < 128 && value >> width != 0) {
            return Err(CellError::OutOfRange { value, width });
        }
        self.ensure_capacity(width as usize)?;
        self.push_uint(value, width);
        Ok(self)
    }

    /// Append a variable-length coin amount (see [`crate::coins`])
    pub fn store_coins(&mut self, value: u128) -> CellResult<&mut Self> {
        coins::store_into(self, value)?;
        Ok(self)
    }

    /// Append whole bytes
    pub fn store_slice(&mut self, bytes: &[u8]) -> CellResult<&mut Self> {
        self.ensure_writable()?;
        self.ensure_capacity(bytes.len() * 8)?;
        self.push_slice(bytes);
        Ok(self)
    }

    /// Append an address: presence bit, then workchain and hash if present
    ///
    /// `None` is the distinguished "no address" wire value and costs one
    /// bit; it is not an error.
    pub fn store_address(&mut self, addr: Option<&MsgAddress>) -> CellResult<&mut Self> {
        self.ensure_writable()?;
        match addr {
            None => {
                self.ensure_capacity(1)?;
                self.push_bit(false);
            }
            Some(addr) => {
                self.ensure_capacity(1 + 8 + 256)?;
                self.push_bit(true);
                // workchain travels as 8-bit two's complement
                self.push_uint(addr.workchain as u8 as u128, 8);
                self.push_slice(&addr.hash);
            }
        }
        Ok(self)
    }

    /// Append a child reference
    pub fn store_ref(&mut self, cell: Arc<Cell>) -> CellResult<&mut Self> {
        self.ensure_writable()?;
        if self.refs.len() >= MAX_REFS {
            return Err(CellError::TooManyRefs {
                refs: self.refs.len(),
                limit: MAX_REFS,
            });
        }
        self.refs.push(cell);
        Ok(self)
    }

    /// Append a 1-bit presence flag, then a ref only if present
    ///
    /// This is how optional payloads stay absent without wasting a ref
    /// slot: `None` contributes exactly one zero bit and no ref.
    pub fn store_maybe_ref(&mut self, cell: Option<Arc<Cell>>) -> CellResult<&mut Self> {
        self.ensure_writable()?;
        match cell {
            None => {
                self.ensure_capacity(1)?;
                self.push_bit(false);
            }
            Some(cell) => {
                self.ensure_capacity(1)?;
                if self.refs.len() >= MAX_REFS {
                    return Err(CellError::TooManyRefs {
                        refs: self.refs.len(),
                        limit: MAX_REFS,
                    });
                }
                self.push_bit(true);
                self.refs.push(cell);
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable cell and invalidate the builder
    pub fn end_cell(&mut self) -> CellResult<Arc<Cell>> {
        self.ensure_writable()?;
        self.finalized = true;
        let data = std::mem::take(&mut self.data);
        let refs = std::mem::take(&mut self.refs);
        Ok(Arc::new(Cell::try_new(data, self.bit_len, refs)?))
    }
}
