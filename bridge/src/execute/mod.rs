//! Execute handlers for the xdomain bridge contract.
//!
//! - `convert` - Transfer dispatch and its transport reply
//! - `config` - Domain table and fee ceiling management
//! - `admin` - Ownership transfer

mod admin;
mod config;
mod convert;

pub use admin::*;
pub use config::*;
pub use convert::*;
