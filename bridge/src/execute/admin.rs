//! Ownership handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Hand ownership to `new_owner` in a single step.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::InvalidCaller {
            caller: info.sender.to_string(),
        });
    }

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    let previous = std::mem::replace(&mut config.owner, new_owner_addr.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("previous_owner", previous)
        .add_attribute("new_owner", new_owner_addr))
}
