//! Address classification types.

use serde::Serialize;
use std::fmt;

/// Legacy classful network (A-E) with its conventional prefix length.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkClass {
    /// Class letter, `'A'` to `'E'`.
    pub letter: char,
    /// Default prefix length; 0 for classes D and E which have no conventional mask.
    pub default_cidr: u8,
}

/// Real-world category of an address.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpKind {
    Private,
    Public,
    Loopback,
    LinkLocal,
    Multicast,
    Reserved,
    Cgnat,
    /// Only produced for text that is not a valid address.
    Unknown,
}

impl fmt::Display for IpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IpKind::Private => "Private",
            IpKind::Public => "Public",
            IpKind::Loopback => "Loopback",
            IpKind::LinkLocal => "Link-Local",
            IpKind::Multicast => "Multicast",
            IpKind::Reserved => "Reserved",
            IpKind::Cgnat => "CGNAT",
            IpKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Classification result with the metadata of the matched range.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpCategory {
    pub kind: IpKind,
    /// Name of the matched range in CIDR form, e.g. `10.0.0.0/8`.
    pub range: Option<&'static str>,
    /// Shortest prefix that keeps a private address inside its private range.
    pub min_cidr: Option<u8>,
    pub description: &'static str,
}

impl IpCategory {
    pub fn unknown() -> IpCategory {
        IpCategory {
            kind: IpKind::Unknown,
            range: None,
            min_cidr: None,
            description: "Not a valid IPv4 address",
        }
    }

    pub fn is_private(&self) -> bool {
        self.kind == IpKind::Private
    }
}

impl fmt::Display for IpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.range {
            Some(range) => write!(f, "{} ({}) - {}", self.kind, range, self.description),
            None => write!(f, "{} - {}", self.kind, self.description),
        }
    }
}
