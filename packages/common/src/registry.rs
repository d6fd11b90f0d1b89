//! Address registry query interface.

use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
#[derive(QueryResponses)]
pub enum RegistryQueryMsg {
    /// Address stored at `index`. Fails if the index was never assigned.
    #[returns(AddressResponse)]
    Address { index: u64 },
    /// Number of registered addresses
    #[returns(AddressCountResponse)]
    AddressCount {},
    /// Paginated list of registered addresses
    #[returns(AddressesResponse)]
    Addresses {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct AddressResponse {
    pub index: u64,
    pub address: String,
}

#[cw_serde]
pub struct AddressCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct AddressesResponse {
    pub addresses: Vec<AddressResponse>,
}
