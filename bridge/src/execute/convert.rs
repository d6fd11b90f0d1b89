//! Transfer dispatch (`Convert`).
//!
//! The processor approves the bridge for `total_input_value` of a CW20 asset
//! and calls `Convert` with a packed aux-data word. The bridge pulls the funds,
//! approves the transport and issues one `Xcall` carrying the resolved domain,
//! the resolved recipient, the slippage and the relayer fee.
//!
//! The `Xcall` is sent as a reply-on-success sub-message. `DISPATCH_LOCK` is
//! set before it and cleared in the reply, so a `Convert` that re-enters
//! through the transport is rejected.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, SubMsg, Uint128,
    WasmMsg,
};
use cw20::{AllowanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::aux_data::{decode_destination_index, decode_domain_index, decode_slippage};
use crate::domain_table::resolve_domain;
use crate::error::ContractError;
use crate::fee_policy::{compute_fee, load_fee_ceiling};
use crate::msg::ConvertResponse;
use crate::state::{Config, CONFIG, DISPATCH_COUNT, DISPATCH_LOCK, XCALL_REPLY_ID};
use common::registry::{AddressCountResponse, AddressResponse, RegistryQueryMsg};
use common::{AssetInfo, TransportExecuteMsg};

/// Resolved parameters of a single dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPlan {
    pub domain_id: u32,
    pub recipient: String,
    pub slippage_bps: u32,
    pub relayer_fee: Uint128,
    /// `total_input_value - relayer_fee`
    pub amount: Uint128,
}

/// Decode `aux_data`, resolve both selectors and price the relayer fee.
pub fn plan_transfer(
    deps: Deps,
    config: &Config,
    total_input_value: Uint128,
    aux_data: u64,
) -> Result<TransferPlan, ContractError> {
    let destination_index = decode_destination_index(aux_data);
    let domain_index = decode_domain_index(aux_data);

    let recipient = resolve_destination(deps, &config.address_registry, destination_index)?;
    let domain_id = resolve_domain(deps.storage, domain_index)?;

    let slippage_bps = decode_slippage(aux_data);

    let ceiling = load_fee_ceiling(deps.storage)?;
    let relayer_fee = compute_fee(aux_data, ceiling);
    let amount = total_input_value
        .checked_sub(relayer_fee)
        .map_err(|_| ContractError::FeeExceedsInput {
            fee: relayer_fee,
            total: total_input_value,
        })?;

    Ok(TransferPlan {
        domain_id,
        recipient,
        slippage_bps,
        relayer_fee,
        amount,
    })
}

/// Look `index` up in the registry. The registry is append-only, so any index
/// below its count is assigned; other query failures surface as `Std`.
fn resolve_destination(
    deps: Deps,
    registry: &Addr,
    index: u32,
) -> Result<String, ContractError> {
    let count: AddressCountResponse = deps
        .querier
        .query_wasm_smart(registry, &RegistryQueryMsg::AddressCount {})?;
    if index as u64 >= count.count {
        return Err(ContractError::InvalidDestinationIndex { index });
    }

    let response: AddressResponse = deps.querier.query_wasm_smart(
        registry,
        &RegistryQueryMsg::Address {
            index: index as u64,
        },
    )?;
    Ok(response.address)
}

/// Allowance the processor has granted the bridge, zero once expired.
fn available_allowance(
    deps: Deps,
    env: &Env,
    token: &Addr,
    owner: &Addr,
) -> Result<Uint128, ContractError> {
    let response: AllowanceResponse = deps.querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;

    if response.expires.is_expired(&env.block) {
        return Ok(Uint128::zero());
    }
    Ok(response.allowance)
}

/// Execute handler for `Convert`.
pub fn execute_convert(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    input_asset: AssetInfo,
    total_input_value: Uint128,
    aux_data: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.processor {
        return Err(ContractError::InvalidCaller {
            caller: info.sender.to_string(),
        });
    }

    if DISPATCH_LOCK.may_load(deps.storage)?.unwrap_or(false) {
        return Err(ContractError::Reentrancy);
    }

    let token = match input_asset.cw20_addr() {
        Some(addr) => {
            deps.api
                .addr_validate(addr)
                .map_err(|_| ContractError::InvalidInputAsset {
                    reason: format!("malformed cw20 contract address {}", addr),
                })?
        }
        None => {
            return Err(ContractError::InvalidInputAsset {
                reason: format!("expected cw20, got {}", input_asset.kind()),
            })
        }
    };

    let plan = plan_transfer(deps.as_ref(), &config, total_input_value, aux_data)?;

    let available = available_allowance(deps.as_ref(), &env, &token, &config.processor)?;
    if available < total_input_value {
        return Err(ContractError::AllowanceMissing {
            required: total_input_value,
            available,
        });
    }

    DISPATCH_LOCK.save(deps.storage, &true)?;
    let dispatch_id = DISPATCH_COUNT.may_load(deps.storage)?.unwrap_or_default();
    DISPATCH_COUNT.save(deps.storage, &(dispatch_id + 1))?;

    let pull = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: config.processor.to_string(),
            recipient: env.contract.address.to_string(),
            amount: total_input_value,
        })?,
        funds: vec![],
    };

    // The transport pulls amount + relayer_fee, which is the full input
    let approve = WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
            spender: config.transport.to_string(),
            amount: total_input_value,
            expires: None,
        })?,
        funds: vec![],
    };

    let xcall = WasmMsg::Execute {
        contract_addr: config.transport.to_string(),
        msg: to_json_binary(&TransportExecuteMsg::Xcall {
            destination: plan.domain_id,
            to: plan.recipient.clone(),
            asset: token.to_string(),
            delegate: plan.recipient.clone(),
            amount: plan.amount,
            slippage: plan.slippage_bps as u64,
            call_data: Binary::default(),
            relayer_fee: plan.relayer_fee,
        })?,
        funds: vec![],
    };

    let data = ConvertResponse {
        output_value_a: Uint128::zero(),
        output_value_b: Uint128::zero(),
        is_async: false,
    };

    Ok(Response::new()
        .add_message(pull)
        .add_message(approve)
        .add_submessage(SubMsg::reply_on_success(xcall, XCALL_REPLY_ID))
        .set_data(to_json_binary(&data)?)
        .add_attribute("method", "convert")
        .add_attribute("dispatch_id", dispatch_id.to_string())
        .add_attribute("asset", token)
        .add_attribute("total_input_value", total_input_value)
        .add_attribute("domain_id", plan.domain_id.to_string())
        .add_attribute("recipient", plan.recipient)
        .add_attribute("slippage_bps", plan.slippage_bps.to_string())
        .add_attribute("relayer_fee", plan.relayer_fee)
        .add_attribute("amount", plan.amount))
}

/// Reply handler for the transport `Xcall`: releases the dispatch lock.
pub fn handle_xcall_reply(deps: DepsMut) -> Result<Response, ContractError> {
    DISPATCH_LOCK.save(deps.storage, &false)?;
    Ok(Response::new().add_attribute("method", "xcall_reply"))
}
