//! # Operation Message Builder
//!
//! ## Purpose
//!
//! Encodes outgoing operations as a two-level cell: a generic
//! jetton-transfer envelope whose optional forward-payload ref carries the
//! DEX-specific instruction. The envelope/payload split lets one wire shape
//! transport arbitrary operations distinguished only by the inner opcode -
//! a tagged union embedded in a generic transport envelope.
//!
//! ```text
//! TransferEnvelope ──► outer cell: op · query_id · amount · to ·
//!        +                         response · maybe(custom) · fwd_ton ·
//! OperationPayload ──►             maybe(┐)
//!                                        └─ inner cell: opcode · fields...
//! ```
//!
//! Builders are pure functions: identical inputs always produce
//! bit-identical cells, which downstream address/hash determinism depends
//! on.

use crate::builder::CellBuilder;
use crate::reader::CellReader;
use types::cell::Cell;
use types::error::{CellError, CellResult};
use types::{MsgAddress, OpCode, OperationPayload, TransferEnvelope};
use std::sync::Arc;
use tracing::debug;

/// Encode one operation as an opcode-tagged forward-payload cell
///
/// One encoder arm per variant; the sum type keeps wire-format
/// exhaustiveness checkable at compile time.
pub fn build_forward_payload(payload: &OperationPayload) -> CellResult<Arc<Cell>> {
    let mut builder = CellBuilder::new();
    builder.store_uint(u32::from(payload.opcode()) as u128, 32)?;
    match payload {
        OperationPayload::Swap {
            min_out,
            to_pool,
            referral,
        } => {
            builder.store_coins(*min_out)?.store_address(Some(to_pool))?;
            match referral {
                Some(referral) => builder.store_bit(true)?.store_address(Some(referral))?,
                None => builder.store_bit(false)?,
            };
        }
        OperationPayload::ProvideLiquidity { min_lp_out } => {
            builder.store_coins(*min_lp_out)?;
        }
    }
    builder.end_cell()
}

/// Decode an opcode-tagged forward-payload cell
pub fn parse_forward_payload(cell: &Cell) -> CellResult<OperationPayload> {
    let mut reader = CellReader::new(cell);
    let raw = reader.load_uint(32)? as u32;
    let opcode = OpCode::try_from(raw)
        .map_err(|_| CellError::schema_mismatch(0, "operation opcode", format!("{raw:#010x}")))?;
    match opcode {
        OpCode::Swap => {
            let min_out = reader.load_coins()?;
            let to_pool = reader
                .load_address()?
                .ok_or_else(|| CellError::schema_mismatch(32, "pool address", "null address"))?;
            let referral = if reader.load_bit()? {
                Some(reader.load_address()?.ok_or_else(|| {
                    CellError::schema_mismatch(32, "referral address", "null address")
                })?)
            } else {
                None
            };
            Ok(OperationPayload::Swap {
                min_out,
                to_pool,
                referral,
            })
        }
        OpCode::ProvideLiquidity => Ok(OperationPayload::ProvideLiquidity {
            min_lp_out: reader.load_coins()?,
        }),
        other => Err(CellError::schema_mismatch(
            0,
            "forward-payload opcode",
            format!("{other:?}"),
        )),
    }
}

/// Build the outer jetton-transfer envelope around a forward payload
pub fn build_transfer_message(
    envelope: &TransferEnvelope,
    forward_payload: Option<Arc<Cell>>,
) -> CellResult<Arc<Cell>> {
    let mut builder = CellBuilder::new();
    builder
        .store_uint(u32::from(OpCode::JettonTransfer) as u128, 32)?
        .store_uint(envelope.query_id as u128, 64)?
        .store_coins(envelope.amount)?
        .store_address(Some(&envelope.to))?
        .store_address(Some(&envelope.response_address))?
        .store_maybe_ref(envelope.custom_payload.clone())?
        .store_coins(envelope.forward_ton_amount)?
        .store_maybe_ref(forward_payload)?;
    builder.end_cell()
}

/// Build a complete operation message: envelope plus encoded instruction
pub fn build_operation_message(
    envelope: &TransferEnvelope,
    payload: &OperationPayload,
) -> CellResult<Arc<Cell>> {
    let body = build_transfer_message(envelope, Some(build_forward_payload(payload)?))?;
    debug!(opcode = ?payload.opcode(), query_id = envelope.query_id, "operation message built");
    Ok(body)
}

/// Swap entry point mirroring the deployment tooling's call shape
pub fn build_swap_message(
    envelope: &TransferEnvelope,
    min_out: u128,
    to_pool: &MsgAddress,
    referral: Option<&MsgAddress>,
) -> CellResult<Arc<Cell>> {
    build_operation_message(
        envelope,
        &OperationPayload::Swap {
            min_out,
            to_pool: *to_pool,
            referral: referral.copied(),
        },
    )
}

/// Provide-liquidity entry point mirroring the deployment tooling's call shape
pub fn build_provide_lp_message(
    envelope: &TransferEnvelope,
    min_lp_out: u128,
) -> CellResult<Arc<Cell>> {
    build_operation_message(envelope, &OperationPayload::ProvideLiquidity { min_lp_out })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> MsgAddress {
        MsgAddress::new(0, [tag; 32])
    }

    #[test]
    fn test_swap_payload_without_referral_round_trips() {
        let payload = OperationPayload::Swap {
            min_out: 500_000_000,
            to_pool: addr(0xA0),
            referral: None,
        };
        let cell = build_forward_payload(&payload).unwrap();

        let mut reader = CellReader::new(&cell);
        assert_eq!(reader.load_uint(32).unwrap(), 0x25938561);

        let parsed = parse_forward_payload(&cell).unwrap();
        assert_eq!(parsed, payload);
        match parsed {
            OperationPayload::Swap { referral, .. } => assert!(referral.is_none()),
            _ => panic!("expected swap payload"),
        }
    }

    #[test]
    fn test_swap_payload_with_referral_round_trips() {
        let payload = OperationPayload::Swap {
            min_out: 1,
            to_pool: addr(1),
            referral: Some(addr(2)),
        };
        let parsed = parse_forward_payload(&build_forward_payload(&payload).unwrap()).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_provide_lp_payload_round_trips() {
        let payload = OperationPayload::ProvideLiquidity { min_lp_out: 12345 };
        let cell = build_forward_payload(&payload).unwrap();
        let mut reader = CellReader::new(&cell);
        assert_eq!(reader.load_uint(32).unwrap(), 0xfcf9e58f);
        assert_eq!(parse_forward_payload(&cell).unwrap(), payload);
    }

    #[test]
    fn test_transfer_envelope_layout() {
        let envelope = TransferEnvelope::new(1_000_000_000, addr(3), addr(4), 250_000_000);
        let payload = OperationPayload::Swap {
            min_out: 500_000_000,
            to_pool: addr(5),
            referral: None,
        };
        let body = build_operation_message(&envelope, &payload).unwrap();

        let mut reader = CellReader::new(&body);
        assert_eq!(reader.load_uint(32).unwrap(), 0xf8a7ea5);
        assert_eq!(reader.load_uint(64).unwrap(), 0);
        assert_eq!(reader.load_coins().unwrap(), 1_000_000_000);
        assert_eq!(reader.load_address().unwrap(), Some(addr(3)));
        assert_eq!(reader.load_address().unwrap(), Some(addr(4)));
        // no custom payload: single zero bit, no ref consumed
        assert_eq!(reader.load_maybe_ref().unwrap(), None);
        assert_eq!(reader.load_coins().unwrap(), 250_000_000);
        let forward = reader.load_maybe_ref().unwrap().expect("forward payload ref");
        assert_eq!(reader.remaining_bits(), 0);
        assert_eq!(reader.remaining_refs(), 0);

        assert_eq!(parse_forward_payload(&forward).unwrap(), payload);
    }

    #[test]
    fn test_custom_payload_takes_ref_slot() {
        let mut envelope = TransferEnvelope::new(10, addr(6), addr(7), 0);
        envelope.custom_payload = Some(Cell::empty());
        let body = build_transfer_message(&envelope, None).unwrap();
        assert_eq!(body.refs().len(), 1);

        let mut reader = CellReader::new(&body);
        reader.load_uint(32 + 64).unwrap();
        reader.load_coins().unwrap();
        reader.load_address().unwrap();
        reader.load_address().unwrap();
        assert!(reader.load_maybe_ref().unwrap().is_some());
        reader.load_coins().unwrap();
        assert_eq!(reader.load_maybe_ref().unwrap(), None);
    }

    #[test]
    fn test_message_determinism() {
        let envelope = TransferEnvelope::new(77, addr(8), addr(9), 11);
        let a = build_provide_lp_message(&envelope, 13).unwrap();
        let b = build_provide_lp_message(&envelope, 13).unwrap();
        assert_eq!(a.repr_hash(), b.repr_hash());
    }

    #[test]
    fn test_unknown_opcode_is_schema_mismatch() {
        let mut builder = CellBuilder::new();
        builder.store_uint(0xdeadbeef, 32).unwrap();
        let cell = builder.end_cell().unwrap();
        assert!(matches!(
            parse_forward_payload(&cell).unwrap_err(),
            CellError::SchemaMismatch { .. }
        ));
    }

    #[test]
    fn test_envelope_opcode_rejected_as_forward_payload() {
        // a transfer envelope is not a valid inner instruction
        let mut builder = CellBuilder::new();
        builder.store_uint(0xf8a7ea5, 32).unwrap();
        let cell = builder.end_cell().unwrap();
        assert!(matches!(
            parse_forward_payload(&cell).unwrap_err(),
            CellError::SchemaMismatch { .. }
        ));
    }
}
