//! Domain models for subnet planning.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ipv4`] helpers - parsing, validation and octet arithmetic
//! - [`Network`], [`SubnetInfo`] and [`SubnetResult`] - partition output
//! - [`SubnettingNode`] - binary mask-refinement tree

mod ipv4;
mod network;
mod node;

// Re-export public types
pub use ipv4::{
    add_offset, block_size, from_binary, get_cidr_mask, is_valid_ip, netmask, next_address,
    parse_address, parse_octets, previous_address, to_binary, MAX_LENGTH,
};
pub use network::{Network, Scheme, SubnetInfo, SubnetResult};
pub use node::{SubnettingNode, DUMMY_NET, FREE_NET};
