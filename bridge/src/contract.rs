//! xdomain bridge - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, Uint128,
};
use cw2::set_contract_version;

use crate::domain_table::DOMAIN_COUNT;
use crate::error::ContractError;
use crate::execute::{
    execute_append_domains, execute_convert, execute_set_fee_ceiling, execute_transfer_ownership,
    execute_update_domains, handle_xcall_reply,
};
use crate::fee_policy::{DEFAULT_FEE_CEILING, FEE_CEILING};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_fee, query_config, query_decode_aux_data, query_dispatch_count, query_domain,
    query_domain_count, query_domains, query_fee_ceiling, query_simulate_convert,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DISPATCH_COUNT, DISPATCH_LOCK, XCALL_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: deps.api.addr_validate(&msg.owner)?,
        processor: deps.api.addr_validate(&msg.processor)?,
        transport: deps.api.addr_validate(&msg.transport)?,
        address_registry: deps.api.addr_validate(&msg.address_registry)?,
    };
    CONFIG.save(deps.storage, &config)?;

    let ceiling = msg
        .fee_ceiling
        .unwrap_or_else(|| Uint128::from(DEFAULT_FEE_CEILING));
    FEE_CEILING.save(deps.storage, &ceiling)?;

    DOMAIN_COUNT.save(deps.storage, &0)?;
    DISPATCH_LOCK.save(deps.storage, &false)?;
    DISPATCH_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("processor", config.processor)
        .add_attribute("transport", config.transport)
        .add_attribute("address_registry", config.address_registry)
        .add_attribute("fee_ceiling", ceiling))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Convert {
            input_asset,
            total_input_value,
            aux_data,
        } => execute_convert(deps, env, info, input_asset, total_input_value, aux_data),

        // Domain table
        ExecuteMsg::AppendDomains { domain_ids } => execute_append_domains(deps, info, domain_ids),
        ExecuteMsg::UpdateDomains {
            indices,
            domain_ids,
        } => execute_update_domains(deps, info, indices, domain_ids),

        // Fee policy
        ExecuteMsg::SetFeeCeiling { ceiling } => execute_set_fee_ceiling(deps, info, ceiling),

        // Ownership
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        XCALL_REPLY_ID => handle_xcall_reply(deps),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::DispatchCount {} => to_json_binary(&query_dispatch_count(deps)?),

        // Domain table
        QueryMsg::Domain { index } => to_json_binary(&query_domain(deps, index)?),
        QueryMsg::Domains { start_after, limit } => {
            to_json_binary(&query_domains(deps, start_after, limit)?)
        }
        QueryMsg::DomainCount {} => to_json_binary(&query_domain_count(deps)?),

        // Fee policy & codec
        QueryMsg::FeeCeiling {} => to_json_binary(&query_fee_ceiling(deps)?),
        QueryMsg::DecodeAuxData { aux_data } => to_json_binary(&query_decode_aux_data(aux_data)?),
        QueryMsg::ComputeFee { aux_data } => to_json_binary(&query_compute_fee(deps, aux_data)?),
        QueryMsg::SimulateConvert {
            total_input_value,
            aux_data,
        } => to_json_binary(&query_simulate_convert(
            deps,
            total_input_value,
            aux_data,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if FEE_CEILING.may_load(deps.storage)?.is_none() {
        FEE_CEILING.save(deps.storage, &Uint128::from(DEFAULT_FEE_CEILING))?;
    }
    if DISPATCH_LOCK.may_load(deps.storage)?.is_none() {
        DISPATCH_LOCK.save(deps.storage, &false)?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
