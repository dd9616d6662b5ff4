//! IPv4 addressing engine.
//!
//! Classifies an address, computes the network it belongs to for a target
//! prefix length and enumerates the sibling subnets created by borrowing bits
//! from a parent prefix. Every operation is a pure function of its inputs;
//! invalid input comes back as an inspectable result, never as a panic.
//!
//! ```
//! use ipv4_subnet_engine::{calculate, classify, enumerate_subnets, IpKind};
//!
//! assert_eq!(classify("10.5.0.1").kind, IpKind::Private);
//! let details = calculate("192.168.1.10", 26, Some(24));
//! assert_eq!(details.hosts_per_subnet, 62);
//! let subnets = enumerate_subnets("192.168.1.10", 26, 24, 256);
//! assert_eq!(subnets.rows.len(), 4);
//! ```

pub mod codec;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

pub use codec::{addr_to_string, parse_addr, to_binary_string};
pub use config::{Config, OutputFormat, DEFAULT_ENUMERATION_LIMIT, MAX_PREFIX};
pub use models::{
    HostRange, IpCategory, IpKind, Ipv4, NetworkClass, SubnetDetails, SubnetEnumeration, SubnetRow,
};
pub use processing::{
    calculate, check_configuration, check_private_overlap, classify, enumerate_subnets,
    network_class, ConfigIssue,
};

/// Everything the front end shows for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub details: SubnetDetails,
    pub category: IpCategory,
    pub issues: Vec<ConfigIssue>,
    pub subnets: SubnetEnumeration,
}

/// Run every engine layer for `address/cidr` under `parent_cidr`.
///
/// Sibling subnets are listed from `parent_cidr`, or from the base prefix the
/// calculator fell back to when no parent was given. When no bits are borrowed
/// the listing is the single `/cidr` block, so `total_count` always equals
/// `subnets_created`.
pub fn build_report(address: &str, cidr: u8, parent_cidr: Option<u8>, limit: usize) -> Report {
    let details = calculate(address, cidr, parent_cidr);
    let category = classify(address);
    let issues = check_configuration(address, cidr, parent_cidr);
    let subnets = if details.is_valid {
        let base_cidr = if details.borrowed_bits == 0 {
            details.cidr
        } else {
            details.base_cidr
        };
        enumerate_subnets(address, cidr, base_cidr, limit)
    } else {
        SubnetEnumeration::default()
    };
    Report {
        details,
        category,
        issues,
        subnets,
    }
}
