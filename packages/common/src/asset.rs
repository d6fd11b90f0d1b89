//! Asset descriptors handed to the dispatcher by the processor.

use cosmwasm_schema::cw_serde;

/// Kind of asset presented to `Convert`.
#[cw_serde]
pub enum AssetInfo {
    /// Slot not used by the interaction
    NotUsed,
    /// Native bank denom
    Native { denom: String },
    /// CW20 token contract
    Cw20 { contract_addr: String },
    /// Non-fungible accounting handle tracked by the processor
    Virtual { id: u64 },
}

impl AssetInfo {
    /// Short label used in response attributes.
    pub fn kind(&self) -> &'static str {
        match self {
            AssetInfo::NotUsed => "not_used",
            AssetInfo::Native { .. } => "native",
            AssetInfo::Cw20 { .. } => "cw20",
            AssetInfo::Virtual { .. } => "virtual",
        }
    }

    /// CW20 contract address, if this is a CW20 asset.
    pub fn cw20_addr(&self) -> Option<&str> {
        match self {
            AssetInfo::Cw20 { contract_addr } => Some(contract_addr),
            _ => None,
        }
    }
}
