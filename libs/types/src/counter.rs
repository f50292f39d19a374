//! Demo counter contract message type
//!
//! The sample counter contract is a distinct role with its own message
//! schema. It is deliberately kept apart from the router operations: the
//! two roles share the opcode registry but never a wrapper type.

use serde::{Deserialize, Serialize};

/// Increase message for the demo counter contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncreaseCounter {
    pub query_id: u64,
    pub increase_by: u32,
}

impl IncreaseCounter {
    pub fn new(increase_by: u32) -> Self {
        Self {
            query_id: 0,
            increase_by,
        }
    }
}
