//! Addressing engine logic.
//!
//! Each layer builds on the one before it:
//! - [`classifier`] - legacy class, address category and private-range overlap
//! - [`calculator`] - mask, network, broadcast and host parameters
//! - [`enumerator`] - sibling subnets under a parent network
//! - [`validation`] - configuration checks combining the above

pub mod calculator;
pub mod classifier;
pub mod enumerator;
pub mod validation;

// Re-export public functions
pub use calculator::{borrowed_bits, calculate};
pub use classifier::{check_private_overlap, classify, classify_addr, network_class};
pub use enumerator::enumerate_subnets;
pub use validation::{check_configuration, ConfigIssue};
