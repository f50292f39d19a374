//! Router contract state types
//!
//! `RouterConfig` is the deployment-time record serialized once into the
//! root config cell; it is never mutated afterwards. The live on-chain
//! state evolves independently and is read back as a `RouterView` through
//! the response decoder, not through this struct.

use crate::address::MsgAddress;
use crate::cell::Cell;
use std::sync::Arc;

/// Deployment configuration for the router contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    pub is_locked: bool,
    pub admin: MsgAddress,
    pub pool_code: Arc<Cell>,
    pub lp_account_code: Arc<Cell>,
    pub lp_wallet_code: Arc<Cell>,
}

/// Router state as reported by the `get_router_data` query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterView {
    pub is_locked: bool,
    pub admin: MsgAddress,
    /// Upgrade slot; an empty-shaped cell while no upgrade is pending
    pub pending_upgrade: Arc<Cell>,
    pub pool_code: Arc<Cell>,
    pub lp_wallet_code: Arc<Cell>,
    pub lp_account_code: Arc<Cell>,
}
