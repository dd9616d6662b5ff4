//! Address classification.
//!
//! Maps an address to its legacy class and to the well-known range it falls
//! in. Ranges are checked in table order and the first match wins.

use crate::codec::parse_addr;
use crate::models::{IpCategory, IpKind, Ipv4, NetworkClass};
use std::net::Ipv4Addr;

/// A well-known address range.
struct KnownRange {
    kind: IpKind,
    name: &'static str,
    block: Ipv4,
    min_cidr: Option<u8>,
    description: &'static str,
}

const fn known(
    kind: IpKind,
    name: &'static str,
    octets: [u8; 4],
    len: u8,
    min_cidr: Option<u8>,
    description: &'static str,
) -> KnownRange {
    let [a, b, c, d] = octets;
    KnownRange {
        kind,
        name,
        block: Ipv4 {
            addr: Ipv4Addr::new(a, b, c, d),
            mask: len,
        },
        min_cidr,
        description,
    }
}

/// Lookup order matters; the three RFC1918 ranges come first.
#[rustfmt::skip]
static KNOWN_RANGES: [KnownRange; 8] = [
    known(IpKind::Private, "10.0.0.0/8", [10, 0, 0, 0], 8, Some(8), "RFC 1918 private network (Class A block)"),
    known(IpKind::Private, "172.16.0.0/12", [172, 16, 0, 0], 12, Some(12), "RFC 1918 private network (Class B block)"),
    known(IpKind::Private, "192.168.0.0/16", [192, 168, 0, 0], 16, Some(16), "RFC 1918 private network (Class C block)"),
    known(IpKind::Loopback, "127.0.0.0/8", [127, 0, 0, 0], 8, None, "Loopback, traffic never leaves the host"),
    known(IpKind::LinkLocal, "169.254.0.0/16", [169, 254, 0, 0], 16, None, "Link-local, self-assigned when DHCP is unavailable"),
    known(IpKind::Cgnat, "100.64.0.0/10", [100, 64, 0, 0], 10, None, "Carrier-grade NAT shared address space (RFC 6598)"),
    known(IpKind::Multicast, "224.0.0.0/4", [224, 0, 0, 0], 4, None, "Multicast group address (Class D)"),
    known(IpKind::Reserved, "240.0.0.0/4", [240, 0, 0, 0], 4, None, "Reserved for future use (Class E)"),
];

const PRIVATE_RANGE_COUNT: usize = 3;

fn private_ranges() -> &'static [KnownRange] {
    &KNOWN_RANGES[..PRIVATE_RANGE_COUNT]
}

/// Legacy class of an address from its first octet.
pub fn network_class(first_octet: u8) -> NetworkClass {
    let (letter, default_cidr) = match first_octet {
        0..=127 => ('A', 8),
        128..=191 => ('B', 16),
        192..=223 => ('C', 24),
        224..=239 => ('D', 0),
        240..=255 => ('E', 0),
    };
    NetworkClass {
        letter,
        default_cidr,
    }
}

/// Legacy class of a raw 32-bit address.
pub fn network_class_of(addr: u32) -> NetworkClass {
    network_class(addr.to_be_bytes()[0])
}

/// Classify address text; invalid text yields [`IpKind::Unknown`].
pub fn classify(address: &str) -> IpCategory {
    match parse_addr(address) {
        Ok(addr) => classify_addr(addr),
        Err(e) => {
            log::debug!("classify({address}) -> Unknown: {e}");
            IpCategory::unknown()
        }
    }
}

/// Classify a raw 32-bit address.
pub fn classify_addr(addr: u32) -> IpCategory {
    let ip = Ipv4Addr::from(addr);
    let category = KNOWN_RANGES
        .iter()
        .find(|r| r.block.contains(ip))
        .map(|r| IpCategory {
            kind: r.kind,
            range: Some(r.name),
            min_cidr: r.min_cidr,
            description: r.description,
        })
        .unwrap_or(IpCategory {
            kind: IpKind::Public,
            range: None,
            min_cidr: None,
            description: "Publicly routable address",
        });
    log::trace!("classify_addr({addr:#010x}) -> {}", category.kind);
    category
}

/// First RFC1918 range that the network `addr/cidr` intersects.
///
/// A prefix above 32 is treated as /32.
pub fn check_private_overlap(addr: u32, cidr: u8) -> Option<&'static str> {
    let candidate = Ipv4 {
        addr: Ipv4Addr::from(addr),
        mask: cidr,
    };
    private_ranges()
        .iter()
        .find(|r| candidate.overlaps(&r.block))
        .map(|r| r.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_class() {
        assert_eq!(network_class(0), NetworkClass { letter: 'A', default_cidr: 8 });
        assert_eq!(network_class(127).letter, 'A');
        assert_eq!(network_class(128), NetworkClass { letter: 'B', default_cidr: 16 });
        assert_eq!(network_class(191).letter, 'B');
        assert_eq!(network_class(192), NetworkClass { letter: 'C', default_cidr: 24 });
        assert_eq!(network_class(223).default_cidr, 24);
        assert_eq!(network_class(224), NetworkClass { letter: 'D', default_cidr: 0 });
        assert_eq!(network_class(239).letter, 'D');
        assert_eq!(network_class(240), NetworkClass { letter: 'E', default_cidr: 0 });
        assert_eq!(network_class(255).letter, 'E');
    }

    #[test]
    fn test_classify_private() {
        let c = classify("10.5.0.1");
        assert_eq!(c.kind, IpKind::Private);
        assert_eq!(c.range, Some("10.0.0.0/8"));
        assert_eq!(c.min_cidr, Some(8));

        let c = classify("172.31.255.255");
        assert_eq!(c.range, Some("172.16.0.0/12"));
        assert_eq!(c.min_cidr, Some(12));
        assert_eq!(classify("172.32.0.0").kind, IpKind::Public);
        assert_eq!(classify("172.15.255.255").kind, IpKind::Public);

        let c = classify("192.168.100.1");
        assert_eq!(c.range, Some("192.168.0.0/16"));
        assert_eq!(c.min_cidr, Some(16));
    }

    #[test]
    fn test_classify_special() {
        assert_eq!(classify("8.8.8.8").kind, IpKind::Public);
        assert_eq!(classify("127.0.0.1").kind, IpKind::Loopback);
        assert_eq!(classify("169.254.1.1").kind, IpKind::LinkLocal);
        assert_eq!(classify("100.64.0.1").kind, IpKind::Cgnat);
        assert_eq!(classify("100.127.255.255").kind, IpKind::Cgnat);
        assert_eq!(classify("100.128.0.0").kind, IpKind::Public);
        assert_eq!(classify("224.0.0.1").kind, IpKind::Multicast);
        assert_eq!(classify("239.255.255.255").kind, IpKind::Multicast);
        assert_eq!(classify("240.0.0.1").kind, IpKind::Reserved);
        assert_eq!(classify("255.255.255.255").kind, IpKind::Reserved);
        assert_eq!(classify("127.0.0.1").min_cidr, None);
    }

    #[test]
    fn test_classify_invalid() {
        let c = classify("10.0.0.256");
        assert_eq!(c.kind, IpKind::Unknown);
        assert_eq!(c.range, None);
        assert_eq!(classify("").kind, IpKind::Unknown);
    }

    #[test]
    fn test_check_private_overlap() {
        let addr = parse_addr("11.0.0.1").unwrap();
        assert_eq!(check_private_overlap(addr, 7), Some("10.0.0.0/8"));
        assert_eq!(check_private_overlap(addr, 8), None);

        let addr = parse_addr("172.0.0.1").unwrap();
        assert_eq!(check_private_overlap(addr, 8), Some("172.16.0.0/12"));
        assert_eq!(check_private_overlap(addr, 16), None);

        // /0 spans everything, first range in table order wins
        assert_eq!(check_private_overlap(0, 0), Some("10.0.0.0/8"));

        let addr = parse_addr("8.8.8.8").unwrap();
        assert_eq!(check_private_overlap(addr, 24), None);

        // Edges of 192.168.0.0/16
        let addr = parse_addr("192.167.255.255").unwrap();
        assert_eq!(check_private_overlap(addr, 32), None);
        assert_eq!(check_private_overlap(addr, 14), None);
        assert_eq!(check_private_overlap(addr, 12), Some("192.168.0.0/16"));
        let addr = parse_addr("192.169.0.0").unwrap();
        assert_eq!(check_private_overlap(addr, 16), None);
        assert_eq!(check_private_overlap(addr, 14), Some("192.168.0.0/16"));
    }

    #[test]
    fn test_known_range_blocks() {
        for r in KNOWN_RANGES.iter() {
            assert_eq!(r.block.to_string(), r.name);
            assert_eq!(r.block.lo(), r.block.addr, "{} is not aligned", r.name);
        }
        assert_eq!(private_ranges().len(), 3);
        assert!(private_ranges().iter().all(|r| r.kind == IpKind::Private));
    }
}
