//! # Tondex Types Library
//!
//! Pure data structures for the tondex cell codec: immutable cell nodes,
//! account addresses, router configuration and state views, operation
//! payloads, and typed query-stack values.
//!
//! ## Design Philosophy
//!
//! - **Pure Data**: no encoding rules live here - field orders, opcode
//!   prefixes, and schema layouts belong to the `codec` crate
//! - **Immutability**: finalized cells never change and are `Arc`-shared;
//!   config records are built once and serialized once
//! - **Type Safety**: absent addresses are `Option`, operations are a
//!   closed sum type, stack entries carry their runtime kind
//!
//! ## Quick Start
//!
//! ```rust
//! use types::{MsgAddress, RouterConfig};
//! use types::cell::Cell;
//!
//! let admin = MsgAddress::new(0, [0x11; 32]);
//! let config = RouterConfig {
//!     is_locked: false,
//!     admin,
//!     pool_code: Cell::empty(),
//!     lp_account_code: Cell::empty(),
//!     lp_wallet_code: Cell::empty(),
//! };
//! assert!(!config.is_locked);
//!
//! // For serialization, import codec separately:
//! // use codec::config::build_router_data;
//! // let root = build_router_data(&config)?;
//! ```

pub mod address;
pub mod cell;
pub mod counter;
pub mod error;
pub mod opcode;
pub mod operation;
pub mod router;
pub mod stack;

// Re-export key types for convenience
pub use address::{AddressParseError, MsgAddress};
pub use cell::{Cell, MAX_BITS, MAX_REFS};
pub use counter::IncreaseCounter;
pub use error::{CellError, CellResult};
pub use opcode::OpCode;
pub use operation::{OperationPayload, TransferEnvelope};
pub use router::{RouterConfig, RouterView};
pub use stack::StackValue;
