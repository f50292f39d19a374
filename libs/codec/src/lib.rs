//! # Tondex Codec - Cell Encoding and Decoding Rules
//!
//! ## Purpose
//!
//! This crate contains the "rules" layer of the tondex system:
//! - Bit-level cell construction with capacity enforcement
//! - Primitive codecs (fixed-width integers, variable-length coins,
//!   booleans, optional refs, account addresses)
//! - Schema serializers for the router config cell and operation messages
//! - The positional decoder for query-result stacks
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → [codec] → external provider
//!     ↑           ↓            ↓
//! Pure Data   Wire Rules   init data /
//! Structures  Validation   message bodies /
//! Cell, Addr  Encoding     query stacks
//! ```
//!
//! ## What This Crate Contains
//! - **CellBuilder / CellReader**: the bit-and-ref wire primitives
//! - **coins**: the dedicated variable-length amount codec
//! - **config**: router config root-cell serializer and parser
//! - **message**: transfer envelope and opcode-tagged forward payloads
//! - **counter**: the demo counter contract's separate schema
//! - **decoder**: positional `get_router_data` / getter decoding
//!
//! ## What This Crate Does NOT Contain
//! - Network transport, signing, or address derivation (external
//!   collaborator's concern)
//! - Raw data structure definitions (belong in `libs/types`)
//!
//! Everything here is synchronous and pure: no I/O, no shared mutable
//! state. Builders are single-owner; finalized cells are immutable and
//! safely shared across threads.

pub mod builder;
pub mod coins;
pub mod config;
pub mod counter;
pub mod decoder;
pub mod error;
pub mod message;
pub mod reader;

// Re-export key types for convenience
pub use builder::CellBuilder;
pub use config::{build_router_data, parse_router_data};
pub use counter::{build_increase_message, parse_increase_message};
pub use decoder::{decode_contract_id, decode_counter, decode_router_data, StackReader};
pub use error::{CellError, CellResult};
pub use message::{
    build_forward_payload, build_operation_message, build_provide_lp_message, build_swap_message,
    build_transfer_message, parse_forward_payload,
};
pub use reader::CellReader;

// Re-export the shared data vocabulary so callers need one import path
pub use types::{
    Cell, IncreaseCounter, MsgAddress, OpCode, OperationPayload, RouterConfig, RouterView,
    StackValue, TransferEnvelope, MAX_BITS, MAX_REFS,
};
