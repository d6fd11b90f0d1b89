//! Common - Shared Interfaces for the xdomain bridge contracts
//!
//! This package holds the message and type definitions that cross contract
//! boundaries: the asset kinds accepted by the dispatcher, the transport
//! `xcall` interface, and the address registry query interface.

pub mod asset;
pub mod registry;
pub mod transport;

pub use asset::AssetInfo;
pub use registry::{AddressCountResponse, AddressResponse, AddressesResponse, RegistryQueryMsg};
pub use transport::TransportExecuteMsg;
