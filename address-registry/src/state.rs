use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:address-registry";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of a destination-domain account in bytes
pub const ADDRESS_BYTES: usize = 20;

/// Number of registered addresses; also the next index to assign
pub const ADDRESS_COUNT: Item<u64> = Item::new("address_count");

/// index => lowercased `0x`-prefixed hex address
pub const ADDRESSES: Map<u64, String> = Map::new("addresses");
