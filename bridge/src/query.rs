//! Query handlers for the xdomain bridge contract.

use cosmwasm_std::{Deps, StdError, StdResult, Uint128};

use crate::aux_data::AuxData;
use crate::domain_table::{domain_count, list_domains, resolve_domain};
use crate::execute::plan_transfer;
use crate::fee_policy::{compute_fee, effective_fee_bps, load_fee_ceiling};
use crate::msg::{
    ComputeFeeResponse, ConfigResponse, DispatchCountResponse, DomainCountResponse,
    DomainResponse, DomainsResponse, FeeCeilingResponse, SimulateConvertResponse,
};
use crate::state::{CONFIG, DISPATCH_COUNT};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Core Queries
// ============================================================================

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        processor: config.processor,
        transport: config.transport,
        address_registry: config.address_registry,
    })
}

pub fn query_dispatch_count(deps: Deps) -> StdResult<DispatchCountResponse> {
    let count = DISPATCH_COUNT.may_load(deps.storage)?.unwrap_or_default();
    Ok(DispatchCountResponse { count })
}

// ============================================================================
// Domain Queries
// ============================================================================

pub fn query_domain(deps: Deps, index: u32) -> StdResult<DomainResponse> {
    let domain_id =
        resolve_domain(deps.storage, index).map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(DomainResponse { index, domain_id })
}

/// Query paginated domain table entries.
pub fn query_domains(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<DomainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let domains = list_domains(deps.storage, start_after, limit)?
        .into_iter()
        .map(|(index, domain_id)| DomainResponse { index, domain_id })
        .collect();
    Ok(DomainsResponse { domains })
}

pub fn query_domain_count(deps: Deps) -> StdResult<DomainCountResponse> {
    Ok(DomainCountResponse {
        count: domain_count(deps.storage)?,
    })
}

// ============================================================================
// Fee & Aux Data Queries
// ============================================================================

pub fn query_fee_ceiling(deps: Deps) -> StdResult<FeeCeilingResponse> {
    Ok(FeeCeilingResponse {
        ceiling: load_fee_ceiling(deps.storage)?,
    })
}

pub fn query_decode_aux_data(aux_data: u64) -> StdResult<AuxData> {
    Ok(AuxData::decode(aux_data))
}

pub fn query_compute_fee(deps: Deps, aux_data: u64) -> StdResult<ComputeFeeResponse> {
    let ceiling = load_fee_ceiling(deps.storage)?;
    Ok(ComputeFeeResponse {
        fee_bps: effective_fee_bps(aux_data),
        fee: compute_fee(aux_data, ceiling),
    })
}

/// Resolve and price a `Convert` without the caller, asset and allowance checks.
pub fn query_simulate_convert(
    deps: Deps,
    total_input_value: Uint128,
    aux_data: u64,
) -> StdResult<SimulateConvertResponse> {
    let config = CONFIG.load(deps.storage)?;
    let plan = plan_transfer(deps, &config, total_input_value, aux_data)
        .map_err(|e| StdError::generic_err(e.to_string()))?;

    Ok(SimulateConvertResponse {
        domain_id: plan.domain_id,
        recipient: plan.recipient,
        slippage_bps: plan.slippage_bps,
        relayer_fee: plan.relayer_fee,
        amount: plan.amount,
    })
}
