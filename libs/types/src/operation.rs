//! Router operation payloads and the transfer envelope
//!
//! The wire shape is a generic "transfer with attached instruction": a
//! jetton-transfer envelope whose optional forward-payload ref carries the
//! DEX-specific instruction, distinguished only by its inner opcode. The
//! payloads form a closed sum type so wire-format exhaustiveness is checked
//! at compile time - adding an operation without an encoder is a compile
//! error, not a runtime surprise.

use crate::address::MsgAddress;
use crate::cell::Cell;
use crate::opcode::OpCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// DEX instruction carried inside a transfer's forward payload
///
/// Constructed per outgoing message; consumed exactly once by message
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationPayload {
    /// Swap through a pool, optionally crediting a referral address
    Swap {
        min_out: u128,
        to_pool: MsgAddress,
        referral: Option<MsgAddress>,
    },
    /// Provide liquidity, bounding the minimum LP tokens minted
    ProvideLiquidity { min_lp_out: u128 },
}

impl OperationPayload {
    /// The 32-bit opcode tag this payload encodes under
    pub fn opcode(&self) -> OpCode {
        match self {
            OperationPayload::Swap { .. } => OpCode::Swap,
            OperationPayload::ProvideLiquidity { .. } => OpCode::ProvideLiquidity,
        }
    }
}

/// Parameters of the outer jetton-transfer envelope
///
/// `query_id` defaults to 0, matching the deployment tooling's behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEnvelope {
    pub query_id: u64,
    /// Jetton amount moved by the transfer, in coin units
    pub amount: u128,
    pub to: MsgAddress,
    pub response_address: MsgAddress,
    /// Optional custom payload; absent costs one bit, no ref slot
    pub custom_payload: Option<Arc<Cell>>,
    /// TON amount forwarded alongside the inner instruction
    pub forward_ton_amount: u128,
}

impl TransferEnvelope {
    /// Envelope with a zero query id and no custom payload
    pub fn new(
        amount: u128,
        to: MsgAddress,
        response_address: MsgAddress,
        forward_ton_amount: u128,
    ) -> Self {
        Self {
            query_id: 0,
            amount,
            to,
            response_address,
            custom_payload: None,
            forward_ton_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_opcode_mapping() {
        let swap = OperationPayload::Swap {
            min_out: 1,
            to_pool: MsgAddress::new(0, [0u8; 32]),
            referral: None,
        };
        assert_eq!(swap.opcode(), OpCode::Swap);

        let lp = OperationPayload::ProvideLiquidity { min_lp_out: 1 };
        assert_eq!(lp.opcode(), OpCode::ProvideLiquidity);
    }

    #[test]
    fn test_payload_serializes_as_plain_data() {
        let payload = OperationPayload::ProvideLiquidity { min_lp_out: 42 };
        let json = serde_json::to_string(&payload).unwrap();
        let back: OperationPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_envelope_defaults() {
        let env = TransferEnvelope::new(10, MsgAddress::new(0, [1u8; 32]), MsgAddress::new(0, [2u8; 32]), 5);
        assert_eq!(env.query_id, 0);
        assert!(env.custom_payload.is_none());
    }
}
