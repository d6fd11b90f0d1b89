//! Domain Table
//!
//! Ordered, 0-indexed, append-only list of transport domain ids. The packed
//! aux-data word selects an entry with a 5-bit index, so only the first 32
//! entries are reachable from `Convert`; the table itself may grow further.
//!
//! Entries are overwritten in place by `update_domains` but never removed, and
//! `DOMAIN_COUNT` only ever grows.

use cosmwasm_std::{Order, StdResult, Storage};
use cw_storage_plus::{Bound, Item, Map};

use crate::error::ContractError;

// ============================================================================
// Storage
// ============================================================================

/// Number of stored domains; also the next index `append_domains` writes to
pub const DOMAIN_COUNT: Item<u32> = Item::new("domain_count");

/// Key: table index, Value: transport domain id
pub const DOMAINS: Map<u32, u32> = Map::new("domains");

// ============================================================================
// Mutation
// ============================================================================

/// Append `domain_ids` in order. Returns the new count.
pub fn append_domains(storage: &mut dyn Storage, domain_ids: &[u32]) -> StdResult<u32> {
    let mut count = domain_count(storage)?;
    for id in domain_ids {
        DOMAINS.save(storage, count, id)?;
        count += 1;
    }
    DOMAIN_COUNT.save(storage, &count)?;
    Ok(count)
}

/// Overwrite existing entries. Every index is checked before the first write,
/// so a failing batch leaves the table untouched.
pub fn update_domains(
    storage: &mut dyn Storage,
    indices: &[u32],
    domain_ids: &[u32],
) -> Result<(), ContractError> {
    if indices.len() != domain_ids.len() {
        return Err(ContractError::InvalidConfiguration {
            reason: format!(
                "{} indices but {} domain ids",
                indices.len(),
                domain_ids.len()
            ),
        });
    }

    let count = domain_count(storage)?;
    if let Some(&index) = indices.iter().find(|&&index| index >= count) {
        return Err(ContractError::InvalidDomainIndex { index });
    }

    for (index, id) in indices.iter().zip(domain_ids) {
        DOMAINS.save(storage, *index, id)?;
    }
    Ok(())
}

// ============================================================================
// Lookup
// ============================================================================

pub fn domain_count(storage: &dyn Storage) -> StdResult<u32> {
    Ok(DOMAIN_COUNT.may_load(storage)?.unwrap_or_default())
}

/// Domain id stored at `index`. Id `0` is a legal entry.
pub fn resolve_domain(storage: &dyn Storage, index: u32) -> Result<u32, ContractError> {
    if index >= domain_count(storage)? {
        return Err(ContractError::InvalidDomainID { index });
    }
    Ok(DOMAINS.load(storage, index)?)
}

/// Entries after `start_after`, ascending, at most `limit`.
pub fn list_domains(
    storage: &dyn Storage,
    start_after: Option<u32>,
    limit: usize,
) -> StdResult<Vec<(u32, u32)>> {
    DOMAINS
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .collect()
}
