//! Text rendering of calculation results.

use crate::codec::to_dotted_binary_string;
use crate::models::{IpCategory, SubnetDetails, SubnetEnumeration, SubnetRow};
use crate::processing::ConfigIssue;
use colored::Colorize;
use itertools::Itertools;

use super::terminal::{format_field, format_label};

const LABEL_WIDTH: usize = 18;

/// Render the details panel, one labelled line per field.
pub fn details_lines(details: &SubnetDetails, category: &IpCategory) -> Vec<String> {
    if let Some(reason) = details.invalid_reason() {
        return vec![format!(
            "{} '{}/{}': {reason}",
            "INVALID".on_red(),
            details.address,
            details.cidr
        )];
    }

    let class = details
        .class
        .map(|c| format!("{} (default /{})", c.letter, c.default_cidr))
        .unwrap_or_default();
    let binary = |bits: &str| {
        u32::from_str_radix(bits, 2)
            .map(to_dotted_binary_string)
            .unwrap_or_default()
    };

    vec![
        format_label("Address", format!("{}/{}", details.address, details.cidr), LABEL_WIDTH),
        format_label("Category", category, LABEL_WIDTH),
        format_label("Class", class, LABEL_WIDTH),
        format_label("Mask", details.mask, LABEL_WIDTH),
        format_label("Network", details.block(), LABEL_WIDTH),
        format_label("Broadcast", details.broadcast, LABEL_WIDTH),
        format_label("Host range", &details.host_range, LABEL_WIDTH),
        format_label("Host bits", details.host_bits, LABEL_WIDTH),
        format_label("Hosts per subnet", details.hosts_per_subnet, LABEL_WIDTH),
        format_label("Base prefix", format!("/{}", details.base_cidr), LABEL_WIDTH),
        format_label("Borrowed bits", details.borrowed_bits, LABEL_WIDTH),
        format_label("Subnets created", details.subnets_created, LABEL_WIDTH),
        format_label("Address bits", binary(&details.binary_address), LABEL_WIDTH),
        format_label("Mask bits", binary(&details.binary_mask), LABEL_WIDTH),
        format_label("Network bits", binary(&details.binary_network), LABEL_WIDTH),
    ]
}

/// Render one sibling subnet row; the current row is highlighted.
pub fn row_line(row: &SubnetRow) -> String {
    let line = format!(
        "{index},{subnet},{broadcast},{usable}",
        index = format_field(row.index, 6),
        subnet = format_field(row.subnet, 20),
        broadcast = format_field(row.broadcast, 17),
        usable = format_field(&row.usable, 33),
    );
    if row.is_current {
        format!("{} {}", line.green().bold(), "<- current".green())
    } else {
        line
    }
}

/// Header, rows and a trailing note when the list was cut short.
pub fn enumeration_lines(enumeration: &SubnetEnumeration) -> Vec<String> {
    let mut lines = vec![format!(
        "{index},{subnet},{broadcast},{usable}",
        index = format_field("#", 6),
        subnet = format_field("subnet", 20),
        broadcast = format_field("broadcast", 17),
        usable = format_field("usable", 33),
    )];
    lines.extend(enumeration.rows.iter().map(row_line));
    if enumeration.truncated {
        lines.push(format!(
            "#{}# showing {} of {} subnets",
            "NOTE".on_red(),
            enumeration.rows.len(),
            enumeration.total_count
        ));
    }
    lines
}

/// Render configuration issues as a single warning line, empty when there are none.
pub fn issues_line(issues: &[ConfigIssue]) -> Option<String> {
    if issues.is_empty() {
        return None;
    }
    Some(format!("{} {}", "WARNING".on_yellow(), issues.iter().join("; ")))
}

/// Print details, issues and the sibling table to stdout.
pub fn print_report(
    details: &SubnetDetails,
    category: &IpCategory,
    issues: &[ConfigIssue],
    enumeration: &SubnetEnumeration,
) {
    for line in details_lines(details, category) {
        println!("{line}");
    }
    if let Some(line) = issues_line(issues) {
        println!("{line}");
    }
    if !enumeration.rows.is_empty() {
        println!();
        for line in enumeration_lines(enumeration) {
            println!("{line}");
        }
    }
}
