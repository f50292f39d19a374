//! # Response Decoder - Typed Query-Stack Reading
//!
//! ## Purpose
//!
//! Reads the typed stack returned by a read-only query and extracts values
//! in the fixed, schema-defined order. Decoding is strictly positional:
//! there are no names on the wire, only positions, so the reader tracks
//! where it is and names that position in every mismatch error.
//!
//! Decoding is all-or-nothing. A result sequence shorter than expected, or
//! an entry whose type tag does not match the expected primitive, fails
//! with `SchemaMismatch` and no partial view is returned.

use crate::reader::CellReader;
use types::cell::Cell;
use types::error::{CellError, CellResult};
use types::{MsgAddress, RouterView, StackValue};
use std::sync::Arc;
use tracing::debug;

/// Positional cursor over a query-result stack
pub struct StackReader<'a> {
    entries: &'a [StackValue],
    pos: usize,
}

impl<'a> StackReader<'a> {
    pub fn new(entries: &'a [StackValue]) -> Self {
        Self { entries, pos: 0 }
    }

    fn next(&mut self, expected: &str) -> CellResult<&'a StackValue> {
        let value = self.entries.get(self.pos).ok_or_else(|| {
            CellError::schema_mismatch(self.pos, expected, "end of stack")
        })?;
        self.pos += 1;
        Ok(value)
    }

    /// Read an integer entry
    pub fn read_int(&mut self) -> CellResult<i128> {
        let position = self.pos;
        match self.next("int")? {
            StackValue::Int(value) => Ok(*value),
            other => Err(CellError::schema_mismatch(position, "int", other.kind())),
        }
    }

    /// Read a boolean entry (integers on the wire; nonzero is true)
    pub fn read_bool(&mut self) -> CellResult<bool> {
        Ok(self.read_int()? != 0)
    }

    /// Read a cell entry
    pub fn read_cell(&mut self) -> CellResult<Arc<Cell>> {
        let position = self.pos;
        match self.next("cell")? {
            StackValue::Cell(cell) => Ok(cell.clone()),
            other => Err(CellError::schema_mismatch(position, "cell", other.kind())),
        }
    }

    /// Read an address entry: a cell whose bits encode a present address
    pub fn read_address(&mut self) -> CellResult<MsgAddress> {
        let position = self.pos;
        let cell = self.read_cell()?;
        CellReader::new(&cell)
            .load_address()?
            .ok_or_else(|| CellError::schema_mismatch(position, "address", "null address"))
    }
}

/// Decode the `get_router_data` query result into a `RouterView`
///
/// Fixed order: lock state, admin address, pending upgrade slot, then the
/// pool / lp-wallet / lp-account code cells.
pub fn decode_router_data(stack: &[StackValue]) -> CellResult<RouterView> {
    let mut reader = StackReader::new(stack);
    let view = RouterView {
        is_locked: reader.read_bool()?,
        admin: reader.read_address()?,
        pending_upgrade: reader.read_cell()?,
        pool_code: reader.read_cell()?,
        lp_wallet_code: reader.read_cell()?,
        lp_account_code: reader.read_cell()?,
    };
    debug!(is_locked = view.is_locked, admin = %view.admin, "router data decoded");
    Ok(view)
}

/// Decode the `get_counter` query result
pub fn decode_counter(stack: &[StackValue]) -> CellResult<u64> {
    let value = StackReader::new(stack).read_int()?;
    u64::try_from(value)
        .map_err(|_| CellError::schema_mismatch(0, "counter in u64 range", format!("{value}")))
}

/// Decode the `get_id` query result
pub fn decode_contract_id(stack: &[StackValue]) -> CellResult<u32> {
    let value = StackReader::new(stack).read_int()?;
    u32::try_from(value)
        .map_err(|_| CellError::schema_mismatch(0, "id in u32 range", format!("{value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CellBuilder;

    fn address_cell(addr: &MsgAddress) -> Arc<Cell> {
        let mut builder = CellBuilder::new();
        builder.store_address(Some(addr)).unwrap();
        builder.end_cell().unwrap()
    }

    fn code_cell(tag: u8) -> Arc<Cell> {
        let mut builder = CellBuilder::new();
        builder.store_uint(tag as u128, 8).unwrap();
        builder.end_cell().unwrap()
    }

    fn router_stack(admin: &MsgAddress) -> Vec<StackValue> {
        vec![
            StackValue::Int(0),
            StackValue::Cell(address_cell(admin)),
            StackValue::Cell(Cell::empty()),
            StackValue::Cell(code_cell(1)),
            StackValue::Cell(code_cell(3)),
            StackValue::Cell(code_cell(2)),
        ]
    }

    #[test]
    fn test_router_data_decodes_positionally() {
        let admin = MsgAddress::new(0, [0x42; 32]);
        let view = decode_router_data(&router_stack(&admin)).unwrap();
        assert!(!view.is_locked);
        assert_eq!(view.admin, admin);
        assert_eq!(view.pool_code.repr_hash(), code_cell(1).repr_hash());
        assert_eq!(view.lp_wallet_code.repr_hash(), code_cell(3).repr_hash());
        assert_eq!(view.lp_account_code.repr_hash(), code_cell(2).repr_hash());
    }

    #[test]
    fn test_short_stack_is_all_or_nothing() {
        let admin = MsgAddress::new(0, [1; 32]);
        let mut stack = router_stack(&admin);
        stack.pop();
        let err = decode_router_data(&stack).unwrap_err();
        assert!(matches!(err, CellError::SchemaMismatch { position: 5, .. }));
    }

    #[test]
    fn test_type_mismatch_reports_position() {
        let admin = MsgAddress::new(0, [1; 32]);
        let mut stack = router_stack(&admin);
        stack[2] = StackValue::Int(99);
        let err = decode_router_data(&stack).unwrap_err();
        assert_eq!(
            err,
            CellError::schema_mismatch(2, "cell", "int")
        );
    }

    #[test]
    fn test_null_admin_rejected() {
        let admin = MsgAddress::new(0, [1; 32]);
        let mut stack = router_stack(&admin);
        let mut builder = CellBuilder::new();
        builder.store_address(None).unwrap();
        stack[1] = StackValue::Cell(builder.end_cell().unwrap());
        assert!(decode_router_data(&stack).is_err());
    }

    #[test]
    fn test_counter_getters() {
        assert_eq!(decode_counter(&[StackValue::Int(41)]).unwrap(), 41);
        assert!(decode_counter(&[StackValue::Int(-1)]).is_err());
        assert!(decode_counter(&[]).is_err());
        assert_eq!(decode_contract_id(&[StackValue::Int(7)]).unwrap(), 7);
        assert!(decode_contract_id(&[StackValue::Null]).is_err());
    }
}
