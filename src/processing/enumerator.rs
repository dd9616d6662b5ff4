//! Sibling subnet enumeration.
//!
//! Lists the subnets of size `/cidr` that borrowing `cidr - base_cidr` bits
//! carves out of the parent network `/base_cidr`.

use crate::codec::parse_addr;
use crate::models::{
    block_size, prefix_mask, HostRange, Ipv4, SubnetEnumeration, SubnetRow, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Enumerate sibling subnets in ascending order, at most `limit` of them.
///
/// Invalid text, a prefix above 32, or `cidr < base_cidr` gives an empty
/// enumeration rather than an error. `truncated` reports whether rows were cut
/// off by `limit`.
pub fn enumerate_subnets(
    address: &str,
    cidr: u8,
    base_cidr: u8,
    limit: usize,
) -> SubnetEnumeration {
    let addr = match parse_addr(address) {
        Ok(addr) => addr,
        Err(e) => {
            log::debug!("enumerate_subnets({address}) invalid input: {e}");
            return SubnetEnumeration::default();
        }
    };
    if cidr > MAX_LENGTH || base_cidr > cidr {
        log::debug!("enumerate_subnets({address}) nothing to enumerate for /{base_cidr} -> /{cidr}");
        return SubnetEnumeration::default();
    }

    let current = Ipv4Addr::from(addr);
    let base_network = u64::from(addr & prefix_mask(base_cidr));
    let borrowed_bits = cidr - base_cidr;
    let total_count = 1u64 << borrowed_bits;
    // /0 is 2^32 addresses wide, kept in u64 so it does not wrap to 0
    let increment = block_size(cidr);
    let shown = total_count.min(limit as u64);
    let truncated = total_count > limit as u64;

    let rows = (0..shown)
        .map(|i| {
            // Every row lies inside the /base_cidr block, so the values fit in u32.
            let network = (base_network + i * increment) as u32;
            let broadcast = (u64::from(network) + increment - 1) as u32;
            let network_addr = Ipv4Addr::from(network);
            let broadcast_addr = Ipv4Addr::from(broadcast);
            let subnet = Ipv4 {
                addr: network_addr,
                mask: cidr,
            };
            SubnetRow {
                index: i as usize + 1,
                subnet,
                broadcast: broadcast_addr,
                usable: HostRange::between(network_addr, broadcast_addr, cidr),
                is_current: subnet.contains(current),
            }
        })
        .collect::<Vec<SubnetRow>>();

    if truncated {
        log::warn!(
            "{address}: /{base_cidr} -> /{cidr} creates {total_count} subnets, showing first {}",
            rows.len()
        );
    } else {
        log::debug!("{address}: /{base_cidr} -> /{cidr} creates {total_count} subnets");
    }

    SubnetEnumeration {
        rows,
        total_count,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENUMERATION_LIMIT;

    #[test]
    fn test_enumerate_26_in_24() {
        let e = enumerate_subnets("192.168.1.10", 26, 24, DEFAULT_ENUMERATION_LIMIT);
        assert_eq!(e.total_count, 4);
        assert!(!e.truncated);
        assert_eq!(e.rows.len(), 4);

        let first = &e.rows[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.subnet.to_string(), "192.168.1.0/26");
        assert_eq!(first.broadcast, Ipv4Addr::new(192, 168, 1, 63));
        assert_eq!(first.usable.to_string(), "192.168.1.1 - 192.168.1.62");
        assert!(first.is_current);

        let last = &e.rows[3];
        assert_eq!(last.index, 4);
        assert_eq!(last.subnet.to_string(), "192.168.1.192/26");
        assert_eq!(last.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(e.rows.iter().filter(|r| r.is_current).count(), 1);
    }

    #[test]
    fn test_enumerate_current_row_in_middle() {
        let e = enumerate_subnets("10.20.130.1", 10, 8, DEFAULT_ENUMERATION_LIMIT);
        assert_eq!(e.total_count, 4);
        let current: Vec<usize> = e.rows.iter().filter(|r| r.is_current).map(|r| r.index).collect();
        assert_eq!(current, vec![1]);

        let e = enumerate_subnets("10.200.0.1", 10, 8, DEFAULT_ENUMERATION_LIMIT);
        let current: Vec<usize> = e.rows.iter().filter(|r| r.is_current).map(|r| r.index).collect();
        assert_eq!(current, vec![4]);
    }

    #[test]
    fn test_enumerate_truncated() {
        let e = enumerate_subnets("10.0.0.1", 30, 8, 256);
        assert_eq!(e.total_count, 4194304);
        assert!(e.truncated);
        assert_eq!(e.rows.len(), 256);
        assert_eq!(e.rows[255].subnet.to_string(), "10.0.3.252/30");
        assert_eq!(e.rows[255].broadcast, Ipv4Addr::new(10, 0, 3, 255));
    }

    #[test]
    fn test_enumerate_limit_exact() {
        let e = enumerate_subnets("10.0.0.1", 16, 8, 256);
        assert_eq!(e.total_count, 256);
        assert!(!e.truncated);
        assert_eq!(e.rows.len(), 256);
    }

    #[test]
    fn test_enumerate_prefix_zero() {
        let e = enumerate_subnets("8.8.8.8", 0, 0, 10);
        assert_eq!(e.total_count, 1);
        assert_eq!(e.rows.len(), 1);
        assert_eq!(e.rows[0].subnet.to_string(), "0.0.0.0/0");
        assert_eq!(e.rows[0].broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert!(e.rows[0].is_current);

        let e = enumerate_subnets("8.8.8.8", 1, 0, 10);
        assert_eq!(e.total_count, 2);
        assert_eq!(e.rows[1].subnet.to_string(), "128.0.0.0/1");
        assert_eq!(e.rows[1].broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert!(e.rows[0].is_current);
    }

    #[test]
    fn test_enumerate_top_of_address_space() {
        let e = enumerate_subnets("255.255.255.254", 32, 30, 10);
        assert_eq!(e.total_count, 4);
        assert_eq!(e.rows[3].subnet.to_string(), "255.255.255.255/32");
        assert_eq!(e.rows[3].broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(e.rows[3].usable, HostRange::NotApplicable);
        assert!(e.rows[2].is_current);
    }

    #[test]
    fn test_enumerate_preconditions() {
        assert_eq!(
            enumerate_subnets("1.2.3", 26, 24, 256),
            SubnetEnumeration::default()
        );
        let e = enumerate_subnets("10.0.0.1", 16, 24, 256);
        assert!(e.rows.is_empty());
        assert_eq!(e.total_count, 0);
        assert!(!e.truncated);
        assert_eq!(enumerate_subnets("10.0.0.1", 33, 24, 256).total_count, 0);
    }
}
