//! State definitions for the xdomain bridge contract
//!
//! Domain table and fee ceiling storage live next to their logic in
//! `domain_table` and `fee_policy`; this module holds the contract-wide items.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Only identity allowed to mutate the domain table, fee ceiling and owner
    pub owner: Addr,
    /// Only identity allowed to call `Convert`
    pub processor: Addr,
    /// Transport contract receiving `Xcall`
    pub transport: Addr,
    /// Address table contract resolving destination indices
    pub address_registry: Addr,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:xdomain-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the transport `Xcall` sub-message
pub const XCALL_REPLY_ID: u64 = 1;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Set while a transport dispatch is in flight, cleared by its reply
pub const DISPATCH_LOCK: Item<bool> = Item::new("dispatch_lock");

/// Number of successful dispatches; the current value tags the next one
pub const DISPATCH_COUNT: Item<u64> = Item::new("dispatch_count");
