//! Message types for the xdomain bridge contract

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::aux_data::AuxData;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner of the domain table and fee configuration
    pub owner: String,
    /// Upstream processor, the only identity allowed to call `Convert`
    pub processor: String,
    /// Transport contract handling `Xcall`
    pub transport: String,
    /// Address registry resolving destination indices
    pub address_registry: String,
    /// Fee ceiling override (defaults to 0.01 of an 18-decimal unit)
    pub fee_ceiling: Option<Uint128>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Dispatch a cross-domain transfer described by a packed aux-data word
    ///
    /// Authorization: Processor only
    ///
    /// Pulls `total_input_value` of the CW20 asset from the processor, keeps
    /// the relayer fee out of the transferred amount and hands both to the
    /// transport. Response data is a [`ConvertResponse`].
    Convert {
        input_asset: AssetInfo,
        total_input_value: Uint128,
        aux_data: u64,
    },

    /// Append domain ids to the end of the domain table
    ///
    /// Authorization: Owner only
    AppendDomains { domain_ids: Vec<u32> },

    /// Overwrite existing domain table entries
    ///
    /// Authorization: Owner only
    ///
    /// `indices` and `domain_ids` must have the same length and every index
    /// must already exist; otherwise nothing is written.
    UpdateDomains {
        indices: Vec<u32>,
        domain_ids: Vec<u32>,
    },

    /// Replace the relayer fee ceiling (zero disables fees)
    ///
    /// Authorization: Owner only
    SetFeeCeiling { ceiling: Uint128 },

    /// Hand ownership to a new address
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Domain id at a table index
    #[returns(DomainResponse)]
    Domain { index: u32 },

    /// Paginated domain table entries
    #[returns(DomainsResponse)]
    Domains {
        start_after: Option<u32>,
        limit: Option<u32>,
    },

    #[returns(DomainCountResponse)]
    DomainCount {},

    #[returns(FeeCeilingResponse)]
    FeeCeiling {},

    /// Unpack an aux-data word
    #[returns(AuxData)]
    DecodeAuxData { aux_data: u64 },

    /// Relayer fee for an aux-data word at the current ceiling
    #[returns(ComputeFeeResponse)]
    ComputeFee { aux_data: u64 },

    /// Resolve and price a `Convert` without dispatching it
    #[returns(SimulateConvertResponse)]
    SimulateConvert {
        total_input_value: Uint128,
        aux_data: u64,
    },

    #[returns(DispatchCountResponse)]
    DispatchCount {},
}

// ============================================================================
// Responses
// ============================================================================

/// Data returned by `Convert`. The transfer settles asynchronously through
/// the transport, so no output value is produced here.
#[cw_serde]
pub struct ConvertResponse {
    pub output_value_a: Uint128,
    pub output_value_b: Uint128,
    pub is_async: bool,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub processor: Addr,
    pub transport: Addr,
    pub address_registry: Addr,
}

#[cw_serde]
pub struct DomainResponse {
    pub index: u32,
    pub domain_id: u32,
}

#[cw_serde]
pub struct DomainsResponse {
    pub domains: Vec<DomainResponse>,
}

#[cw_serde]
pub struct DomainCountResponse {
    pub count: u32,
}

#[cw_serde]
pub struct FeeCeilingResponse {
    pub ceiling: Uint128,
}

#[cw_serde]
pub struct ComputeFeeResponse {
    /// Rate after clamping to 10,000 bps
    pub fee_bps: u64,
    pub fee: Uint128,
}

#[cw_serde]
pub struct SimulateConvertResponse {
    pub domain_id: u32,
    pub recipient: String,
    pub slippage_bps: u32,
    pub relayer_fee: Uint128,
    /// Amount handed to the transport after the fee
    pub amount: Uint128,
}

#[cw_serde]
pub struct DispatchCountResponse {
    pub count: u64,
}
