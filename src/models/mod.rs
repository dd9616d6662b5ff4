//! Domain models for the addressing engine.
//!
//! This module contains the value types passed between the engine layers:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`IpCategory`] and [`NetworkClass`] - classification results
//! - [`SubnetDetails`] and [`SubnetEnumeration`] - calculation results

mod category;
mod ipv4;
mod subnet;

// Re-export public types
pub use category::{IpCategory, IpKind, NetworkClass};
pub use ipv4::{block_size, num_hosts, prefix_mask, Ipv4, MAX_LENGTH};
pub use subnet::{HostRange, SubnetDetails, SubnetEnumeration, SubnetRow};
