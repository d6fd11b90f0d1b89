//! Configuration management handlers.
//!
//! This module handles:
//! - Domain table management (append/update)
//! - Relayer fee ceiling

use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::domain_table::{append_domains, domain_count, update_domains};
use crate::error::ContractError;
use crate::fee_policy::set_fee_ceiling;
use crate::state::CONFIG;

// ============================================================================
// Domain Table
// ============================================================================

/// Append domain ids to the end of the table.
pub fn execute_append_domains(
    deps: DepsMut,
    info: MessageInfo,
    domain_ids: Vec<u32>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::InvalidCaller {
            caller: info.sender.to_string(),
        });
    }

    let first_index = domain_count(deps.storage)?;
    let count = append_domains(deps.storage, &domain_ids)?;

    Ok(Response::new()
        .add_attribute("method", "append_domains")
        .add_attribute("first_index", first_index.to_string())
        .add_attribute("appended", domain_ids.len().to_string())
        .add_attribute("count", count.to_string()))
}

/// Overwrite existing domain table entries.
pub fn execute_update_domains(
    deps: DepsMut,
    info: MessageInfo,
    indices: Vec<u32>,
    domain_ids: Vec<u32>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::InvalidCaller {
            caller: info.sender.to_string(),
        });
    }

    update_domains(deps.storage, &indices, &domain_ids)?;

    let indices_attr = indices
        .iter()
        .map(|index| index.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(Response::new()
        .add_attribute("method", "update_domains")
        .add_attribute("indices", indices_attr))
}

// ============================================================================
// Fee Ceiling
// ============================================================================

/// Replace the relayer fee ceiling.
pub fn execute_set_fee_ceiling(
    deps: DepsMut,
    info: MessageInfo,
    ceiling: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::InvalidCaller {
            caller: info.sender.to_string(),
        });
    }

    set_fee_ceiling(deps.storage, ceiling)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee_ceiling")
        .add_attribute("ceiling", ceiling))
}
