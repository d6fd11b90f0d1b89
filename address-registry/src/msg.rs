use cosmwasm_schema::cw_serde;

pub use common::registry::{
    AddressCountResponse, AddressResponse, AddressesResponse, RegistryQueryMsg as QueryMsg,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Addresses registered at indices 0.. in order
    pub addresses: Vec<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a destination-domain account (`0x` + 40 hex digits).
    /// The assigned index is returned as response data.
    RegisterAddress { address: String },
}

#[cw_serde]
pub struct MigrateMsg {}
