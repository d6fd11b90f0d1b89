//! xdomain bridge - Cross-Domain Transfer Dispatcher
//!
//! Dispatches CW20 transfers to another domain through an `xcall` transport.
//! The upstream processor describes each transfer with a single packed `u64`:
//!
//! ```text
//! bit 63                                                       0
//! | unused | relayer_fee_bps:14 | slippage_bps:10 | dest:24 | domain:5 |
//! ```
//!
//! # Dispatch Flow
//! 1. Processor approves the bridge and calls `Convert`
//! 2. The destination selector is resolved against the address registry
//! 3. The domain selector is resolved against the owner-managed domain table
//! 4. The relayer fee rate is clamped to 100% and scaled against the ceiling
//! 5. The bridge pulls the input, approves the transport and sends `Xcall`
//!    with `amount = input - fee` and `relayer_fee = fee`
//!
//! # Security
//! - Only the configured processor may call `Convert`
//! - Domain table and fee ceiling are owner-gated
//! - A dispatch lock rejects `Convert` re-entered during the transport call

pub mod aux_data;
pub mod contract;
pub mod domain_table;
pub mod error;
mod execute;
pub mod fee_policy;
pub mod msg;
mod query;
pub mod state;

pub use crate::aux_data::AuxData;
pub use crate::error::ContractError;
pub use crate::fee_policy::compute_fee;
