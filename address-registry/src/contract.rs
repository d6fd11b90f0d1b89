use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdError, StdResult, Storage,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::msg::{
    AddressCountResponse, AddressResponse, AddressesResponse, ExecuteMsg, InstantiateMsg,
    MigrateMsg, QueryMsg,
};
use crate::state::{ADDRESSES, ADDRESS_BYTES, ADDRESS_COUNT, CONTRACT_NAME, CONTRACT_VERSION};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    ADDRESS_COUNT.save(deps.storage, &0)?;
    for address in &msg.addresses {
        register(deps.storage, address)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("address_count", msg.addresses.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterAddress { address } => execute_register_address(deps, info, address),
    }
}

fn execute_register_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let (index, normalized) = register(deps.storage, &address)?;

    Ok(Response::new()
        .set_data(to_json_binary(&index)?)
        .add_attribute("action", "register_address")
        .add_attribute("sender", info.sender)
        .add_attribute("index", index.to_string())
        .add_attribute("address", normalized))
}

/// Append `address` at the next free index.
fn register(storage: &mut dyn Storage, address: &str) -> Result<(u64, String), ContractError> {
    let normalized = normalize_address(address)?;
    let index = ADDRESS_COUNT.load(storage)?;
    ADDRESSES.save(storage, index, &normalized)?;
    ADDRESS_COUNT.save(storage, &(index + 1))?;
    Ok((index, normalized))
}

/// Validate a `0x`-prefixed 20-byte hex account and return it lowercased.
pub fn normalize_address(address: &str) -> Result<String, ContractError> {
    let stripped = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| ContractError::InvalidAddress {
            reason: format!("missing 0x prefix: {}", address),
        })?;

    let bytes = hex::decode(stripped).map_err(|e| ContractError::InvalidAddress {
        reason: e.to_string(),
    })?;
    if bytes.len() != ADDRESS_BYTES {
        return Err(ContractError::InvalidAddress {
            reason: format!("expected {} bytes, got {}", ADDRESS_BYTES, bytes.len()),
        });
    }

    Ok(format!("0x{}", hex::encode(bytes)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Address { index } => to_json_binary(&query_address(deps, index)?),
        QueryMsg::AddressCount {} => to_json_binary(&query_address_count(deps)?),
        QueryMsg::Addresses { start_after, limit } => {
            to_json_binary(&query_addresses(deps, start_after, limit)?)
        }
    }
}

fn query_address(deps: Deps, index: u64) -> StdResult<AddressResponse> {
    let address = ADDRESSES
        .may_load(deps.storage, index)?
        .ok_or_else(|| StdError::not_found(format!("address at index {}", index)))?;
    Ok(AddressResponse { index, address })
}

fn query_address_count(deps: Deps) -> StdResult<AddressCountResponse> {
    let count = ADDRESS_COUNT.load(deps.storage)?;
    Ok(AddressCountResponse { count })
}

fn query_addresses(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AddressesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let addresses = ADDRESSES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (index, address) = item?;
            Ok(AddressResponse { index, address })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AddressesResponse { addresses })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
