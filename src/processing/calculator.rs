//! Subnet calculation.
//!
//! Derives every addressing parameter of `address/cidr` in one pass and
//! returns it as a [`SubnetDetails`] snapshot.

use crate::codec::{parse_addr, to_binary_string};
use crate::models::{num_hosts, HostRange, Ipv4, SubnetDetails, MAX_LENGTH};
use crate::processing::classifier::network_class_of;

/// Bits borrowed from `base_cidr` to reach `cidr`.
///
/// A base of 0 (classes D and E without a parent) means no borrowing.
pub fn borrowed_bits(cidr: u8, base_cidr: u8) -> u8 {
    if base_cidr > 0 && cidr >= base_cidr {
        cidr - base_cidr
    } else {
        0
    }
}

/// Calculate the subnet for `address/cidr`.
///
/// When `parent_cidr` is `None` the legacy class default prefix of the address
/// is used as the base. Invalid text, or a prefix above 32, yields details with
/// `is_valid == false`.
///
/// # Examples
/// ```
/// use ipv4_subnet_engine::processing::calculate;
/// let details = calculate("192.168.1.10", 26, Some(24));
/// assert_eq!(details.network.to_string(), "192.168.1.0");
/// assert_eq!(details.subnets_created, 4);
/// ```
pub fn calculate(address: &str, cidr: u8, parent_cidr: Option<u8>) -> SubnetDetails {
    let addr = match parse_addr(address) {
        Ok(addr) => addr,
        Err(e) => {
            log::debug!("calculate({address}/{cidr}) invalid input: {e}");
            return SubnetDetails::invalid(address, cidr);
        }
    };
    if cidr > MAX_LENGTH || parent_cidr.is_some_and(|p| p > MAX_LENGTH) {
        log::debug!("calculate({address}/{cidr}) prefix out of range, parent={parent_cidr:?}");
        return SubnetDetails::invalid(address, cidr);
    }
    calculate_addr(address, addr, cidr, parent_cidr)
}

fn calculate_addr(address: &str, addr: u32, cidr: u8, parent_cidr: Option<u8>) -> SubnetDetails {
    // Prefixes are checked by the caller, a failure here is a bug.
    let Ok(block) = Ipv4::from_bits(addr, cidr) else {
        return SubnetDetails::invalid(address, cidr);
    };
    let mask = block.netmask();
    let network = block.lo();
    let broadcast = block.hi();

    let class = network_class_of(addr);
    let base_cidr = parent_cidr.unwrap_or(class.default_cidr);
    let host_bits = MAX_LENGTH - cidr;
    let borrowed_bits = borrowed_bits(cidr, base_cidr);

    let details = SubnetDetails {
        is_valid: true,
        address: address.to_string(),
        cidr,
        mask,
        network,
        broadcast,
        host_range: HostRange::between(network, broadcast, cidr),
        host_bits,
        hosts_per_subnet: num_hosts(cidr),
        borrowed_bits,
        subnets_created: 1u64 << borrowed_bits,
        class: Some(class),
        base_cidr,
        binary_address: to_binary_string(addr),
        binary_mask: to_binary_string(u32::from(mask)),
        binary_network: to_binary_string(u32::from(network)),
    };
    log::debug!(
        "calculate({address}/{cidr}) base=/{base_cidr} network={} broadcast={} borrowed={borrowed_bits}",
        details.network,
        details.broadcast
    );
    details
}
