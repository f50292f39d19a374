//! # Variable-Length Coin Amount Codec
//!
//! Coin amounts stay compact on the wire: a 4-bit length nibble giving the
//! byte count (0-15), then that many bytes of the amount in minimal
//! big-endian form. Zero encodes as the zero-length form, costing only the
//! nibble. Fifteen bytes bounds the representable range at `2^120 - 1`;
//! anything larger is `OutOfRange`.
//!
//! Kept as its own module, not a disguised integer codec, so the 4-bit
//! length invariant is owned and tested in one place.

use crate::builder::CellBuilder;
use crate::reader::CellReader;
use types::error::{CellError, CellResult};

/// Largest encodable amount: 15 bytes of payload
pub const MAX_COINS: u128 = (1u128 << 120) - 1;

/// Minimal byte count of `value`'s big-endian form (0 for zero)
pub fn encoded_byte_len(value: u128) -> u32 {
    (128 - value.leading_zeros() + 7) / 8
}

pub(crate) fn store_into(builder: &mut CellBuilder, value: u128) -> CellResult<()> {
    builder.ensure_writable()?;
    if value > MAX_COINS {
        return Err(CellError::OutOfRange { value, width: 120 });
    }
    let byte_len = encoded_byte_len(value);
    builder.ensure_capacity(4 + byte_len as usize * 8)?;
    builder.push_uint(byte_len as u128, 4);
    if byte_len > 0 {
        builder.push_uint(value, byte_len * 8);
    }
    Ok(())
}

pub(crate) fn load_from(reader: &mut CellReader<'_>) -> CellResult<u128> {
    let byte_len = reader.load_uint(4)? as u32;
    if byte_len == 0 {
        return Ok(0);
    }
    reader.load_uint(byte_len * 8)
}
