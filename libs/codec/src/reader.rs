//! # Cell Reader - Positional Decoding Cursor
//!
//! Mirror of the builder: a cursor over a finalized cell's bits and refs,
//! consumed front-to-back in the same order the encoder wrote them.
//! Running past the end of data or refs is a `SchemaMismatch` - the wire
//! shape did not match what the schema demanded. Position context in every
//! error names the bit (or ref index) where decoding stopped.

use crate::coins;
use types::cell::Cell;
use types::error::{CellError, CellResult};
use types::MsgAddress;
use std::sync::Arc;

/// Positional cursor over one cell's bits and child references
pub struct CellReader<'a> {
    cell: &'a Cell,
    bit_pos: usize,
    ref_pos: usize,
}

impl<'a> CellReader<'a> {
    pub fn new(cell: &'a Cell) -> Self {
        Self {
            cell,
            bit_pos: 0,
            ref_pos: 0,
        }
    }

    /// Bits not yet consumed
    pub fn remaining_bits(&self) -> usize {
        self.cell.bit_len() - self.bit_pos
    }

    /// Refs not yet consumed
    pub fn remaining_refs(&self) -> usize {
        self.cell.refs().len() - self.ref_pos
    }

    /// Read one bit
    pub fn load_bit(&mut self) -> CellResult<bool> {
        match self.cell.bit(self.bit_pos) {
            Some(bit) => {
                self.bit_pos += 1;
                Ok(bit)
            }
            None => Err(CellError::schema_mismatch(
                self.bit_pos,
                "1 more bit",
                "end of cell data",
            )),
        }
    }

    /// Read `width` bits as a big-endian unsigned integer
    pub fn load_uint(&mut self, width: u32) -> CellResult<u128> {
        if width > 128 {
            return Err(CellError::OutOfRange { value: 0, width });
        }
        if self.remaining_bits() < width as usize {
            return Err(CellError::schema_mismatch(
                self.bit_pos,
                format!("{width} more bits"),
                format!("{} bits left", self.remaining_bits()),
            ));
        }
        let mut value = 0u128;
        for _ in 0..width {
            value = value << 1 | self.load_bit()? as u128;
        }
        Ok(value)
    }

    /// Read a variable-length coin amount (see [`crate::coins`])
    pub fn load_coins(&mut self) -> CellResult<u128> {
        coins::load_from(self)
    }

    /// Read an address; the distinguished "no address" value is `None`
    pub fn load_address(&mut self) -> CellResult<Option<MsgAddress>> {
        if !self.load_bit()? {
            return Ok(None);
        }
        let workchain = self.load_uint(8)? as u8 as i8;
        let mut hash = [0u8; 32];
        for byte in hash.iter_mut() {
            *byte = self.load_uint(8)? as u8;
        }
        Ok(Some(MsgAddress::new(workchain, hash)))
    }

    /// Consume the next child reference
    pub fn load_ref(&mut self) -> CellResult<Arc<Cell>> {
        match self.cell.refs().get(self.ref_pos) {
            Some(child) => {
                self.ref_pos += 1;
                Ok(child.clone())
            }
            None => Err(CellError::schema_mismatch(
                self.ref_pos,
                "one more ref",
                "no refs left",
            )),
        }
    }

    /// Read a presence bit, then a ref only if present
    pub fn load_maybe_ref(&mut self) -> CellResult<Option<Arc<Cell>>> {
        if self.load_bit()? {
            Ok(Some(self.load_ref()?))
        } else {
            Ok(None)
        }
    }
}
