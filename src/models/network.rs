//! Partition result data model.

use super::ipv4::{add_offset, block_size, next_address, previous_address, MAX_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// One allocated subnet block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Sequential label, "Net 1", "Net 2", ...
    pub name: String,
    /// Base address of the block.
    pub subnet: Ipv4Addr,
    /// Prefix length of the block.
    pub mask: u8,
    /// First usable host address.
    pub first_ip: Ipv4Addr,
    /// Last usable host address.
    pub last_ip: Ipv4Addr,
    /// Last address of the block.
    pub broadcast: Ipv4Addr,
}

impl Network {
    /// Lay out a block of prefix `mask` starting at `subnet`.
    ///
    /// The usable range runs from `subnet + 1` to one before the broadcast, which
    /// is the address right before the next block's base.
    pub fn allocate(name: String, subnet: Ipv4Addr, mask: u8) -> Network {
        let size = block_size(MAX_LENGTH.saturating_sub(mask));
        let broadcast = previous_address(add_offset(subnet, size));
        Network {
            name,
            subnet,
            mask,
            first_ip: next_address(subnet),
            last_ip: previous_address(broadcast),
            broadcast,
        }
    }

    /// Total addresses in the block, network and broadcast included.
    pub fn size(&self) -> u64 {
        block_size(MAX_LENGTH.saturating_sub(self.mask))
    }

    /// Addresses left once network and broadcast are reserved.
    pub fn usable_hosts(&self) -> u64 {
        self.size().saturating_sub(2)
    }

    pub fn cidr(&self) -> String {
        format!("{}/{}", self.subnet, self.mask)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{} - {}] br {}",
            self.name,
            self.cidr(),
            self.first_ip,
            self.last_ip,
            self.broadcast
        )
    }
}

/// Sizing fields specific to the partition scheme that was run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(
    tag = "scheme",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
pub enum Scheme {
    Flsm {
        /// Subnet bits borrowed from the host part.
        n: u8,
        /// Host bits left in every block.
        m: u8,
        number_of_networks: u64,
        /// Addresses per block (`2^m`).
        number_of_hosts: u64,
    },
    Vlsm {
        /// Host counts as requested, in the order they were walked.
        initial_host_per_network: Vec<u64>,
        /// Realized block sizes, parallel to `initial_host_per_network`.
        host_per_network: Vec<u64>,
    },
}

/// Metadata summarizing one partition run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetInfo {
    pub initial_ip: Ipv4Addr,
    pub initial_mask: u8,
    #[serde(flatten)]
    pub scheme: Scheme,
}

/// Partition output: metadata plus the networks in allocation order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetResult {
    pub subnet_info: SubnetInfo,
    pub networks: Vec<Network>,
}
