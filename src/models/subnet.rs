//! Results of a subnet calculation and of a sibling-subnet enumeration.

use super::{Ipv4, NetworkClass};
use crate::codec::parse_addr;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Usable host range of a block.
///
/// `NotApplicable` is a valid answer (a /31 or /32 has no usable range) and is
/// kept apart from `Unavailable`, which only appears when the input was invalid.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HostRange {
    Usable { first: Ipv4Addr, last: Ipv4Addr },
    NotApplicable,
    Unavailable,
}

impl HostRange {
    /// Range between `network` and `broadcast`, exclusive of both.
    pub fn between(network: Ipv4Addr, broadcast: Ipv4Addr, cidr: u8) -> HostRange {
        if cidr >= 31 {
            return HostRange::NotApplicable;
        }
        HostRange::Usable {
            first: Ipv4Addr::from(u32::from(network) + 1),
            last: Ipv4Addr::from(u32::from(broadcast) - 1),
        }
    }

    pub fn first(&self) -> Option<Ipv4Addr> {
        match self {
            HostRange::Usable { first, .. } => Some(*first),
            _ => None,
        }
    }

    pub fn last(&self) -> Option<Ipv4Addr> {
        match self {
            HostRange::Usable { last, .. } => Some(*last),
            _ => None,
        }
    }
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostRange::Usable { first, last } => write!(f, "{first} - {last}"),
            HostRange::NotApplicable => f.write_str("N/A"),
            HostRange::Unavailable => Ok(()),
        }
    }
}

/// Complete snapshot of one calculation for an (address, cidr, parent) triple.
///
/// Built in one piece by [`crate::processing::calculate`]; never patched.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDetails {
    pub is_valid: bool,
    /// Address text as supplied by the caller.
    pub address: String,
    pub cidr: u8,
    pub mask: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub host_range: HostRange,
    pub host_bits: u8,
    pub hosts_per_subnet: u64,
    pub borrowed_bits: u8,
    pub subnets_created: u64,
    /// Legacy class of the address; `None` when the input was invalid.
    pub class: Option<NetworkClass>,
    /// Parent prefix the borrowed bits are counted from.
    pub base_cidr: u8,
    pub binary_address: String,
    pub binary_mask: String,
    pub binary_network: String,
}

impl SubnetDetails {
    /// Zeroed details for input that could not be computed.
    pub fn invalid(address: &str, cidr: u8) -> SubnetDetails {
        SubnetDetails {
            is_valid: false,
            address: address.to_string(),
            cidr,
            mask: Ipv4Addr::UNSPECIFIED,
            network: Ipv4Addr::UNSPECIFIED,
            broadcast: Ipv4Addr::UNSPECIFIED,
            host_range: HostRange::Unavailable,
            host_bits: 0,
            hosts_per_subnet: 0,
            borrowed_bits: 0,
            subnets_created: 0,
            class: None,
            base_cidr: 0,
            binary_address: String::new(),
            binary_mask: String::new(),
            binary_network: String::new(),
        }
    }

    /// Why the details could not be computed, `None` when they are valid.
    pub fn invalid_reason(&self) -> Option<&'static str> {
        if self.is_valid {
            None
        } else if parse_addr(&self.address).is_err() {
            Some("invalid IPv4 address")
        } else {
            Some("prefix length out of range (0-32)")
        }
    }

    pub fn first_host(&self) -> Option<Ipv4Addr> {
        self.host_range.first()
    }

    pub fn last_host(&self) -> Option<Ipv4Addr> {
        self.host_range.last()
    }

    /// The computed network as a CIDR block.
    pub fn block(&self) -> Ipv4 {
        Ipv4 {
            addr: self.network,
            mask: self.cidr,
        }
    }
}

/// One sibling subnet under the parent network.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRow {
    /// 1-based position among the siblings.
    pub index: usize,
    pub subnet: Ipv4,
    pub broadcast: Ipv4Addr,
    pub usable: HostRange,
    /// Set on the row that contains the input address.
    pub is_current: bool,
}

/// Rows produced by [`crate::processing::enumerate_subnets`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SubnetEnumeration {
    pub rows: Vec<SubnetRow>,
    /// Number of siblings that exist, which may exceed `rows.len()`.
    pub total_count: u64,
    /// True when `total_count` was larger than the requested limit.
    pub truncated: bool,
}
