//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing a CIDR block, along with the mask and
//! block-size arithmetic every other module builds on. All arithmetic stays in
//! `u32`; widening to `u64` is used only where a shift by 32 would otherwise
//! overflow.

use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask for a prefix length, saturating at /32.
///
/// `prefix_mask(0)` is `0`; the shift is done in `u64` so that a shift by 32
/// is defined.
///
/// # Examples
/// ```
/// use ipv4_subnet_engine::models::prefix_mask;
/// assert_eq!(prefix_mask(24), 0xFFFFFF00);
/// ```
pub const fn prefix_mask(len: u8) -> u32 {
    let len = if len > MAX_LENGTH { MAX_LENGTH } else { len };
    let right_len = (MAX_LENGTH - len) as u32;
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Usable hosts in a block, excluding network and broadcast addresses.
///
/// Floors at 0 for /31 and /32.
pub fn num_hosts(len: u8) -> u64 {
    block_size(len).saturating_sub(2)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Build a block from a raw address and prefix length.
    pub fn from_bits(addr: u32, mask: u8) -> Result<Ipv4, Box<dyn Error>> {
        if mask > MAX_LENGTH {
            return Err("Network length is too long".into());
        }
        Ok(Ipv4 {
            addr: Ipv4Addr::from(addr),
            mask,
        })
    }

    /// The subnet mask as an address, e.g. `255.255.255.0` for /24.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(prefix_mask(self.mask))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & prefix_mask(self.mask))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | !prefix_mask(self.mask))
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Check whether two blocks share at least one address.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.lo() <= other.hi() && self.hi() >= other.lo()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
