//! Fee Policy Module
//!
//! Turns the relayer-fee rate packed into aux data into an absolute fee.
//!
//! ## Fee Formula
//!
//! ```text
//! fee = min(relayer_fee_bps, 10_000) * ceiling / 10_000   (floor)
//! ```
//!
//! The rate is a share of the configured ceiling, not of the transferred
//! amount. Rates above 100% are clamped rather than rejected. The fee is
//! denominated in the input asset and deducted from the transferred amount.

use cosmwasm_std::{StdResult, Storage, Uint128};
use cw_storage_plus::Item;

use crate::aux_data::decode_fee_rate;

// ============================================================================
// Constants
// ============================================================================

/// Maximum effective rate in basis points (100%)
pub const MAX_FEE_BPS: u64 = 10_000;

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Default fee ceiling: 0.01 of an 18-decimal unit
pub const DEFAULT_FEE_CEILING: u128 = 10_000_000_000_000_000;

// ============================================================================
// Storage
// ============================================================================

/// Absolute fee charged at a 10,000 bps rate
pub const FEE_CEILING: Item<Uint128> = Item::new("fee_ceiling");

pub fn load_fee_ceiling(storage: &dyn Storage) -> StdResult<Uint128> {
    FEE_CEILING.load(storage)
}

/// Replace the ceiling. No bounds: zero disables relayer fees.
pub fn set_fee_ceiling(storage: &mut dyn Storage, ceiling: Uint128) -> StdResult<()> {
    FEE_CEILING.save(storage, &ceiling)
}

// ============================================================================
// Fee Calculation
// ============================================================================

/// Effective rate encoded in `aux_data`, clamped to 100%.
pub fn effective_fee_bps(aux_data: u64) -> u64 {
    (decode_fee_rate(aux_data) as u64).min(MAX_FEE_BPS)
}

/// Relayer fee for `aux_data` against `ceiling`.
pub fn compute_fee(aux_data: u64, ceiling: Uint128) -> Uint128 {
    calculate_fee_from_bps(ceiling, effective_fee_bps(aux_data))
}

/// `ceiling * fee_bps / 10_000`, with a 256-bit intermediate.
pub fn calculate_fee_from_bps(ceiling: Uint128, fee_bps: u64) -> Uint128 {
    ceiling.multiply_ratio(fee_bps as u128, BPS_DENOMINATOR)
}
