//! Dotted-decimal address codec.
//!
//! Converts between the textual `a.b.c.d` form and the `u32` the rest of the
//! engine computes with, and renders 32-bit values as binary strings.

use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::net::Ipv4Addr;

lazy_static! {
    // One decimal octet with no leading zeros, "0" itself allowed.
    static ref OCTET_RE: Regex = Regex::new(r"^(0|[1-9][0-9]{0,2})$").expect("Invalid Regex?");
}

/// Parse dotted-decimal text into a 32-bit address.
///
/// Only the canonical form is accepted: exactly four parts, each a decimal
/// number in `0..=255` without leading zeros, signs or whitespace.
///
/// # Examples
/// ```
/// use ipv4_subnet_engine::codec::parse_addr;
/// assert_eq!(parse_addr("192.168.1.10").unwrap(), 0xC0A8010A);
/// assert!(parse_addr("1.2.3.04").is_err());
/// ```
pub fn parse_addr(text: &str) -> Result<u32, Box<dyn Error>> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(format!("Invalid address {text}: expected 4 octets").into());
    }

    let mut octets = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        if !OCTET_RE.is_match(part) {
            return Err(format!("Invalid address {text}: bad octet '{part}'").into());
        }
        octets[i] = part
            .parse::<u8>()
            .map_err(|_| format!("Invalid address {text}: octet '{part}' out of range"))?;
    }

    Ok(u32::from_be_bytes(octets))
}

/// Render a 32-bit address as dotted decimal, most significant octet first.
pub fn addr_to_string(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// Render a 32-bit value as exactly 32 `0`/`1` characters, MSB first.
pub fn to_binary_string(bits: u32) -> String {
    format!("{bits:032b}")
}

/// Binary rendering split into octets, e.g. `11000000.10101000.00000001.00001010`.
pub fn to_dotted_binary_string(bits: u32) -> String {
    bits.to_be_bytes()
        .iter()
        .map(|b| format!("{b:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}
