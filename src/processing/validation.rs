//! Configuration checks.
//!
//! The calculator computes whatever it is asked for. These checks report
//! whether the requested `address/cidr` under `parent_cidr` is a sensible
//! configuration before its results are relied on.

use crate::codec::parse_addr;
use crate::models::MAX_LENGTH;
use crate::processing::classifier::{check_private_overlap, classify_addr};
use std::fmt;

/// A user-correctable problem with a requested subnetting operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    InvalidAddress,
    PrefixOutOfRange {
        cidr: u8,
    },
    /// The prefix would widen a private network past its RFC1918 range.
    PrivatePrefixTooShort {
        range: &'static str,
        min_cidr: u8,
        cidr: u8,
    },
    /// A non-private network whose span reaches into an RFC1918 range.
    PublicOverlapsPrivate {
        range: &'static str,
    },
    PrefixBelowParent {
        cidr: u8,
        parent_cidr: u8,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::InvalidAddress => f.write_str("Address is not a valid IPv4 address"),
            ConfigIssue::PrefixOutOfRange { cidr } => {
                write!(f, "Prefix /{cidr} is out of range, must be 0-{MAX_LENGTH}")
            }
            ConfigIssue::PrivatePrefixTooShort {
                range,
                min_cidr,
                cidr,
            } => write!(
                f,
                "Prefix /{cidr} leaves private range {range}, use /{min_cidr} or longer"
            ),
            ConfigIssue::PublicOverlapsPrivate { range } => {
                write!(f, "Network overlaps private range {range}")
            }
            ConfigIssue::PrefixBelowParent { cidr, parent_cidr } => write!(
                f,
                "Prefix /{cidr} is shorter than parent prefix /{parent_cidr}"
            ),
        }
    }
}

/// Collect every configuration issue for `address/cidr` under `parent_cidr`.
///
/// An empty result means the configuration is acceptable.
pub fn check_configuration(address: &str, cidr: u8, parent_cidr: Option<u8>) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    let addr = match parse_addr(address) {
        Ok(addr) => addr,
        Err(_) => return vec![ConfigIssue::InvalidAddress],
    };
    if cidr > MAX_LENGTH {
        return vec![ConfigIssue::PrefixOutOfRange { cidr }];
    }
    if let Some(parent_cidr) = parent_cidr {
        if parent_cidr > MAX_LENGTH {
            issues.push(ConfigIssue::PrefixOutOfRange { cidr: parent_cidr });
        } else if cidr < parent_cidr {
            issues.push(ConfigIssue::PrefixBelowParent { cidr, parent_cidr });
        }
    }

    let category = classify_addr(addr);
    match (category.range, category.min_cidr) {
        (Some(range), Some(min_cidr)) if category.is_private() => {
            if cidr < min_cidr {
                issues.push(ConfigIssue::PrivatePrefixTooShort {
                    range,
                    min_cidr,
                    cidr,
                });
            }
        }
        _ => {
            if let Some(range) = check_private_overlap(addr, cidr) {
                issues.push(ConfigIssue::PublicOverlapsPrivate { range });
            }
        }
    }

    if !issues.is_empty() {
        log::debug!("check_configuration({address}/{cidr}) -> {issues:?}");
    }
    issues
}
