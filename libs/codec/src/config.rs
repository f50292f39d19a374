//! # Router Config Serializer
//!
//! ## Purpose
//!
//! Maps a `RouterConfig` into the single root cell the contract is deployed
//! with. The field order and the fixed zero-initialization of the metadata
//! sub-cell are invariants of the format: any deviation produces a
//! structurally different root hash and therefore a different, incompatible
//! contract address.
//!
//! Root cell layout:
//! `bit(lock) · addr(admin) · ref(lp_wallet_code) · ref(pool_code) ·
//! ref(lp_account_code) · ref(metadata)`
//!
//! Metadata cell layout (the "upgrade pending" slot, empty at deployment):
//! `uint64(0) · uint64(0) · addr(null) · ref(empty cell)`
//!
//! Malformed config is a programmer error, not a runtime condition: codec
//! failures propagate unchanged with no local recovery.

use crate::builder::CellBuilder;
use crate::reader::CellReader;
use types::cell::Cell;
use types::error::{CellError, CellResult};
use types::RouterConfig;
use std::sync::Arc;
use tracing::debug;

/// Build the fixed-shape metadata cell with an empty upgrade slot
fn build_metadata_cell() -> CellResult<Arc<Cell>> {
    let mut builder = CellBuilder::new();
    builder
        .store_uint(0, 64)?
        .store_uint(0, 64)?
        .store_address(None)?
        .store_ref(Cell::empty())?;
    builder.end_cell()
}

/// Serialize a router configuration into its root data cell
pub fn build_router_data(config: &RouterConfig) -> CellResult<Arc<Cell>> {
    let mut builder = CellBuilder::new();
    builder
        .store_bit(config.is_locked)?
        .store_address(Some(&config.admin))?
        .store_ref(config.lp_wallet_code.clone())?
        .store_ref(config.pool_code.clone())?
        .store_ref(config.lp_account_code.clone())?
        .store_ref(build_metadata_cell()?)?;
    let root = builder.end_cell()?;
    debug!(hash = %hex::encode(root.repr_hash()), "router config cell built");
    Ok(root)
}

/// Read a router configuration back out of its root data cell
///
/// Inverse of [`build_router_data`]; the metadata ref is consumed but its
/// contents are not interpreted (the live upgrade slot is read through the
/// response decoder instead).
pub fn parse_router_data(cell: &Cell) -> CellResult<RouterConfig> {
    let mut reader = CellReader::new(cell);
    let is_locked = reader.load_bit()?;
    let admin = reader
        .load_address()?
        .ok_or_else(|| CellError::schema_mismatch(1, "admin address", "null address"))?;
    let lp_wallet_code = reader.load_ref()?;
    let pool_code = reader.load_ref()?;
    let lp_account_code = reader.load_ref()?;
    let _metadata = reader.load_ref()?;
    Ok(RouterConfig {
        is_locked,
        admin,
        pool_code,
        lp_account_code,
        lp_wallet_code,
    })
}
