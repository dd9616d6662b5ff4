//! Read-only snapshot of a calculation for an advisory collaborator.
//!
//! The snapshot is plain text so it can be placed in front of a free-text
//! question; [`context_json`] carries the same data as JSON.

use crate::models::{SubnetDetails, SubnetEnumeration};
use serde::Serialize;
use std::error::Error;

/// Textual context block describing the latest calculation.
pub fn context_block(details: &SubnetDetails) -> String {
    if let Some(reason) = details.invalid_reason() {
        return format!("Address: {}/{} ({reason})\n", details.address, details.cidr);
    }

    let (first, last) = match (details.first_host(), details.last_host()) {
        (Some(first), Some(last)) => (first.to_string(), last.to_string()),
        _ => ("N/A".to_string(), "N/A".to_string()),
    };
    [
        format!("Address: {}", details.address),
        format!("Base prefix: /{}", details.base_cidr),
        format!("Target prefix: /{}", details.cidr),
        format!("Borrowed bits: {}", details.borrowed_bits),
        format!("Subnets created: {}", details.subnets_created),
        format!("Hosts per subnet: {}", details.hosts_per_subnet),
        format!("Network address: {}", details.network),
        format!("Broadcast address: {}", details.broadcast),
        format!("First host: {first}"),
        format!("Last host: {last}"),
    ]
    .iter()
    .map(|line| format!("{line}\n"))
    .collect()
}

#[derive(Serialize)]
struct Snapshot<'a> {
    details: &'a SubnetDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnets: Option<&'a SubnetEnumeration>,
}

/// JSON snapshot of the details and, when given, the sibling subnets.
pub fn context_json(
    details: &SubnetDetails,
    enumeration: Option<&SubnetEnumeration>,
) -> Result<String, Box<dyn Error>> {
    let snapshot = Snapshot {
        details,
        subnets: enumeration,
    };
    serde_json::to_string_pretty(&snapshot).map_err(|e| format!("Error serializing JSON: {e}").into())
}
