//! # Operation Opcode Registry
//!
//! Closed registry of the 32-bit opcodes this system encodes or decodes.
//! Keeping the set in one `#[repr(u32)]` enum makes wire-format dispatch a
//! checked conversion instead of a match over magic numbers, and lets the
//! compiler prove every variant has exactly one encoder.
//!
//! Two contract roles share this registry but never share a schema: the
//! production router (`JettonTransfer` envelope carrying `Swap` /
//! `ProvideLiquidity` forward payloads) and the demo counter contract
//! (`IncreaseCounter`).

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// All message opcodes known to this codec
///
/// The transfer opcode has 28 significant bits; it is still stored in a
/// full 32-bit field on the wire.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
pub enum OpCode {
    /// Outer jetton-transfer envelope
    JettonTransfer = 0x0f8a7ea5,
    /// Swap instruction carried as a forward payload
    Swap = 0x25938561,
    /// Provide-liquidity instruction carried as a forward payload
    ProvideLiquidity = 0xfcf9e58f,
    /// Demo counter contract's increase message
    IncreaseCounter = 0x7e8764ef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_values_match_wire_contract() {
        assert_eq!(u32::from(OpCode::JettonTransfer), 0xf8a7ea5);
        assert_eq!(u32::from(OpCode::Swap), 0x25938561);
        assert_eq!(u32::from(OpCode::ProvideLiquidity), 0xfcf9e58f);
        assert_eq!(u32::from(OpCode::IncreaseCounter), 0x7e8764ef);
    }

    #[test]
    fn test_checked_conversion() {
        assert_eq!(OpCode::try_from(0x25938561u32), Ok(OpCode::Swap));
        assert!(OpCode::try_from(0xdeadbeefu32).is_err());
    }
}
