//! Error types for the xdomain bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Invalid caller: {caller} is not authorized for this action")]
    InvalidCaller { caller: String },

    #[error("Reentrant convert: a transport dispatch is already in flight")]
    Reentrancy,

    // ========================================================================
    // Domain Table Errors
    // ========================================================================

    #[error("Invalid domain index: {index} is out of range")]
    InvalidDomainIndex { index: u32 },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid domain ID: no domain registered at index {index}")]
    InvalidDomainID { index: u32 },

    // ========================================================================
    // Dispatch Errors
    // ========================================================================

    #[error("Invalid input asset: {reason}")]
    InvalidInputAsset { reason: String },

    #[error("Invalid destination index: no address registered at index {index}")]
    InvalidDestinationIndex { index: u32 },

    #[error("Allowance missing: required {required}, available {available}")]
    AllowanceMissing {
        required: Uint128,
        available: Uint128,
    },

    #[error("Relayer fee {fee} exceeds input value {total}")]
    FeeExceedsInput { fee: Uint128, total: Uint128 },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}
