//! Address Registry - append-only destination address table
//!
//! Maps small sequential indices to 20-byte destination-domain accounts so a
//! packed aux-data word can select a recipient with a 24-bit index. Anyone may
//! register; entries are never removed or overwritten.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
