//! Transport `xcall` interface.
//!
//! The transport pulls `amount + relayer_fee` of `asset` from the sender
//! through CW20 `TransferFrom`, so the sender must have granted at least that
//! allowance before dispatching.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

#[cw_serde]
pub enum TransportExecuteMsg {
    /// Start a cross-domain transfer
    Xcall {
        /// Destination domain id
        destination: u32,
        /// Recipient on the destination domain
        to: String,
        /// CW20 contract address of the transferred asset
        asset: String,
        /// Identity allowed to adjust the transfer on the destination domain
        delegate: String,
        /// Amount delivered to `to` (before destination-side slippage)
        amount: Uint128,
        /// Maximum slippage in basis points
        slippage: u64,
        /// Payload forwarded to `to` (empty for plain transfers)
        call_data: Binary,
        /// Fee paid to relayers, in the same asset
        relayer_fee: Uint128,
    },
}
