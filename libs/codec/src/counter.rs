//! Demo counter contract messages
//!
//! The sample counter contract is a separate role from the production
//! router and keeps its own message schema here, never mixed into the
//! transfer envelope machinery.
//!
//! Wire layout: `uint32(0x7e8764ef) · uint64(query_id) · uint32(increase_by)`

use crate::builder::CellBuilder;
use crate::reader::CellReader;
use types::cell::Cell;
use types::error::{CellError, CellResult};
use types::{IncreaseCounter, OpCode};
use std::sync::Arc;

/// Encode an increase message for the demo counter contract
pub fn build_increase_message(message: &IncreaseCounter) -> CellResult<Arc<Cell>> {
    let mut builder = CellBuilder::new();
    builder
        .store_uint(u32::from(OpCode::IncreaseCounter) as u128, 32)?
        .store_uint(message.query_id as u128, 64)?
        .store_uint(message.increase_by as u128, 32)?;
    builder.end_cell()
}

/// Decode an increase message
pub fn parse_increase_message(cell: &Cell) -> CellResult<IncreaseCounter> {
    let mut reader = CellReader::new(cell);
    let raw = reader.load_uint(32)? as u32;
    if raw != u32::from(OpCode::IncreaseCounter) {
        return Err(CellError::schema_mismatch(
            0,
            "increase-counter opcode",
            format!("{raw:#010x}"),
        ));
    }
    Ok(IncreaseCounter {
        query_id: reader.load_uint(64)? as u64,
        increase_by: reader.load_uint(32)? as u32,
    })
}
