//! Aux Data Codec
//!
//! The processor hands the bridge a single `u64` that packs four independent
//! parameters as adjacent unsigned bit-fields, least significant first:
//!
//! | Field               | Width | Offset |
//! |---------------------|-------|--------|
//! | `domain_index`      | 5     | 0      |
//! | `destination_index` | 24    | 5      |
//! | `slippage_bps`      | 10    | 29     |
//! | `relayer_fee_bps`   | 14    | 39     |
//!
//! Offsets are derived from the widths, so a layout change is a one-line edit.
//! Decoding is total: every `u64` is structurally valid, and range checks only
//! happen later against table state.

use cosmwasm_schema::cw_serde;

// ============================================================================
// Layout
// ============================================================================

pub const DOMAIN_INDEX_BITS: u32 = 5;
pub const DESTINATION_INDEX_BITS: u32 = 24;
pub const SLIPPAGE_BITS: u32 = 10;
pub const RELAYER_FEE_BITS: u32 = 14;

pub const DOMAIN_INDEX_OFFSET: u32 = 0;
pub const DESTINATION_INDEX_OFFSET: u32 = DOMAIN_INDEX_OFFSET + DOMAIN_INDEX_BITS;
pub const SLIPPAGE_OFFSET: u32 = DESTINATION_INDEX_OFFSET + DESTINATION_INDEX_BITS;
pub const RELAYER_FEE_OFFSET: u32 = SLIPPAGE_OFFSET + SLIPPAGE_BITS;

/// Total number of bits consumed by the layout
pub const USED_BITS: u32 = RELAYER_FEE_OFFSET + RELAYER_FEE_BITS;

const _: () = assert!(USED_BITS <= u64::BITS, "aux data layout exceeds 64 bits");

pub const DOMAIN_INDEX_MASK: u64 = mask(DOMAIN_INDEX_BITS);
pub const DESTINATION_INDEX_MASK: u64 = mask(DESTINATION_INDEX_BITS);
pub const SLIPPAGE_MASK: u64 = mask(SLIPPAGE_BITS);
pub const RELAYER_FEE_MASK: u64 = mask(RELAYER_FEE_BITS);

const fn mask(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

#[inline]
const fn extract(word: u64, offset: u32, mask: u64) -> u64 {
    (word >> offset) & mask
}

// ============================================================================
// Field Decoders
// ============================================================================

pub fn decode_domain_index(word: u64) -> u32 {
    extract(word, DOMAIN_INDEX_OFFSET, DOMAIN_INDEX_MASK) as u32
}

pub fn decode_destination_index(word: u64) -> u32 {
    extract(word, DESTINATION_INDEX_OFFSET, DESTINATION_INDEX_MASK) as u32
}

pub fn decode_slippage(word: u64) -> u32 {
    extract(word, SLIPPAGE_OFFSET, SLIPPAGE_MASK) as u32
}

pub fn decode_fee_rate(word: u64) -> u32 {
    extract(word, RELAYER_FEE_OFFSET, RELAYER_FEE_MASK) as u32
}

// ============================================================================
// AuxData
// ============================================================================

/// Unpacked view of an aux-data word.
#[cw_serde]
#[derive(Copy, Eq, Default)]
pub struct AuxData {
    pub domain_index: u32,
    pub destination_index: u32,
    pub slippage_bps: u32,
    pub relayer_fee_bps: u32,
}

impl AuxData {
    pub fn decode(word: u64) -> Self {
        Self {
            domain_index: decode_domain_index(word),
            destination_index: decode_destination_index(word),
            slippage_bps: decode_slippage(word),
            relayer_fee_bps: decode_fee_rate(word),
        }
    }

    /// Pack the fields into a word.
    ///
    /// Values wider than their field spill into the neighbouring field; use
    /// [`AuxData::fits`] first when the input is not trusted.
    pub fn encode(&self) -> u64 {
        ((self.domain_index as u64) << DOMAIN_INDEX_OFFSET)
            | ((self.destination_index as u64) << DESTINATION_INDEX_OFFSET)
            | ((self.slippage_bps as u64) << SLIPPAGE_OFFSET)
            | ((self.relayer_fee_bps as u64) << RELAYER_FEE_OFFSET)
    }

    /// Whether every field is within its declared width.
    pub fn fits(&self) -> bool {
        self.domain_index as u64 <= DOMAIN_INDEX_MASK
            && self.destination_index as u64 <= DESTINATION_INDEX_MASK
            && self.slippage_bps as u64 <= SLIPPAGE_MASK
            && self.relayer_fee_bps as u64 <= RELAYER_FEE_MASK
    }
}
