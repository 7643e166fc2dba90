//! Variable-length subnet masking: each block is sized to its own host count.

use super::capacity::{minimum_bits, remaining_bits};
use crate::error::SubnetError;
use crate::models::{
    add_offset, block_size, parse_address, Network, Scheme, SubnetInfo, SubnetResult, MAX_LENGTH,
};
use itertools::Itertools;
use std::cmp::Reverse;
use std::net::Ipv4Addr;

/// Host bits for one entry: room for `hosts` plus network and broadcast.
fn host_bits_for(hosts: u64, mask: u8) -> Result<u8, SubnetError> {
    let required = hosts
        .checked_add(2)
        .ok_or(SubnetError::InsufficientHostMask)?;
    let bits = minimum_bits(required)?;
    remaining_bits(mask, bits).ok_or(SubnetError::InsufficientHostMask)?;
    Ok(bits)
}

/// Check the blocks fit after `mask` and stay inside the IPv4 address space.
fn check_capacity(initial_ip: Ipv4Addr, mask: u8, host_bits: &[u8]) -> Result<(), SubnetError> {
    let total = host_bits
        .iter()
        .try_fold(0u64, |acc, &bits| acc.checked_add(block_size(bits)))
        .ok_or(SubnetError::InsufficientHostMask)?;

    let m = minimum_bits(total)?;
    let n = remaining_bits(mask, m).ok_or(SubnetError::InsufficientHostMask)?;
    log::debug!("vlsm total={total} m={m} n={n}");

    // the walk is authoritative: its cursor must not run past 255.255.255.255
    let end = u64::from(u32::from(initial_ip)) + total;
    if end > block_size(MAX_LENGTH) {
        log::warn!("vlsm walk from {initial_ip} runs {total} addresses past the address space");
        return Err(SubnetError::InsufficientHostMask);
    }
    Ok(())
}

/// Allocate one block per entry of `host_list`, in the given order.
///
/// Each block gets the smallest mask that holds its hosts plus network and
/// broadcast; the next block starts right after it. The list is NOT sorted, so
/// blocks may not be aligned to their own size (see [`ordered_host_vlsm`]).
///
/// # Errors
/// * [`SubnetError::InvalidAddress`] if `ip` is not a dotted quad
/// * [`SubnetError::InvalidMask`] if `mask` is above 32
/// * [`SubnetError::EmptyHostList`] if `host_list` is empty
/// * [`SubnetError::InsufficientHostMask`] if the blocks do not fit after `mask`
pub fn host_vlsm(ip: &str, mask: u8, host_list: &[u64]) -> Result<SubnetResult, SubnetError> {
    let initial_ip = parse_address(ip)?;
    if mask > MAX_LENGTH {
        return Err(SubnetError::InvalidMask(mask));
    }
    if host_list.is_empty() {
        return Err(SubnetError::EmptyHostList);
    }

    let host_bits = host_list
        .iter()
        .map(|&hosts| host_bits_for(hosts, mask))
        .collect::<Result<Vec<u8>, SubnetError>>()?;
    check_capacity(initial_ip, mask, &host_bits)?;

    log::info!(
        "host_vlsm({initial_ip}/{mask}, [{}])",
        host_list.iter().join(", ")
    );

    let mut subnet = initial_ip;
    let mut networks = Vec::with_capacity(host_list.len());
    let mut host_per_network = Vec::with_capacity(host_list.len());
    for (i, &bits) in host_bits.iter().enumerate() {
        let net = Network::allocate(format!("Net {}", i + 1), subnet, MAX_LENGTH - bits);
        log::debug!("allocated {net} for {} hosts", host_list[i]);
        subnet = add_offset(subnet, block_size(bits));
        host_per_network.push(block_size(bits));
        networks.push(net);
    }

    Ok(SubnetResult {
        subnet_info: SubnetInfo {
            initial_ip,
            initial_mask: mask,
            scheme: Scheme::Vlsm {
                initial_host_per_network: host_list.to_vec(),
                host_per_network,
            },
        },
        networks,
    })
}

/// [`host_vlsm`] with the biggest requests allocated first.
///
/// Descending order keeps every block aligned to its own size, which is the
/// usual way to plan VLSM.
pub fn ordered_host_vlsm(
    ip: &str,
    mask: u8,
    host_list: &[u64],
) -> Result<SubnetResult, SubnetError> {
    parse_address(ip)?;

    let ordered: Vec<u64> = host_list
        .iter()
        .copied()
        .sorted_by_key(|&hosts| Reverse(hosts))
        .collect();
    host_vlsm(ip, mask, &ordered)
}
