//! Fixed-length subnet masking: every block gets the same mask.

use super::capacity::{minimum_bits, remaining_bits};
use crate::error::SubnetError;
use crate::models::{
    add_offset, block_size, parse_address, Network, Scheme, SubnetInfo, SubnetResult, MAX_LENGTH,
};

fn check_flsm_mask(mask: u8) -> Result<(), SubnetError> {
    if mask == 0 || mask > MAX_LENGTH {
        return Err(SubnetError::InvalidMask(mask));
    }
    Ok(())
}

/// Split `ip/mask` into at least `min_networks` equal blocks.
///
/// The count is rounded up to a power of two; every block is named
/// "Net 1", "Net 2", ... in address order.
///
/// # Errors
/// * [`SubnetError::InvalidAddress`] if `ip` is not a dotted quad
/// * [`SubnetError::InvalidMask`] if `mask` is outside `1..=32`
/// * [`SubnetError::ZeroCapacity`] if `min_networks` is zero
/// * [`SubnetError::InsufficientNetworkMask`] if the networks do not fit after `mask`
pub fn networks_flsm(ip: &str, mask: u8, min_networks: u64) -> Result<SubnetResult, SubnetError> {
    let initial_ip = parse_address(ip)?;
    check_flsm_mask(mask)?;

    let n = minimum_bits(min_networks)?;
    let m = remaining_bits(mask, n).ok_or(SubnetError::InsufficientNetworkMask)?;
    let new_mask = mask + n;
    let number_of_networks = block_size(n);
    let number_of_hosts = block_size(m);

    log::info!(
        "networks_flsm({initial_ip}/{mask}, {min_networks}) n={n} m={m} -> {number_of_networks} x /{new_mask}"
    );

    let mut subnet = initial_ip;
    let mut networks = Vec::with_capacity(number_of_networks as usize);
    for i in 1..=number_of_networks {
        let net = Network::allocate(format!("Net {i}"), subnet, new_mask);
        log::debug!("allocated {net}");
        subnet = add_offset(subnet, number_of_hosts);
        networks.push(net);
    }

    Ok(SubnetResult {
        subnet_info: SubnetInfo {
            initial_ip,
            initial_mask: mask,
            scheme: Scheme::Flsm {
                n,
                m,
                number_of_networks,
                number_of_hosts,
            },
        },
        networks,
    })
}

/// Split `ip/mask` into equal blocks that each hold at least `min_host` usable hosts.
///
/// Two addresses per block are reserved for network and broadcast. As many
/// blocks as fit are produced.
///
/// # Errors
/// * [`SubnetError::InvalidAddress`] if `ip` is not a dotted quad
/// * [`SubnetError::InvalidMask`] if `mask` is outside `1..=32`
/// * [`SubnetError::InsufficientHostMask`] if one block of that size does not fit after `mask`
pub fn host_flsm(ip: &str, mask: u8, min_host: u64) -> Result<SubnetResult, SubnetError> {
    parse_address(ip)?;
    check_flsm_mask(mask)?;

    let required = min_host
        .checked_add(2)
        .ok_or(SubnetError::InsufficientHostMask)?;
    let m = minimum_bits(required)?;
    let n = remaining_bits(mask, m).ok_or(SubnetError::InsufficientHostMask)?;
    log::debug!("host_flsm({ip}/{mask}, {min_host}) m={m} n={n}");

    networks_flsm(ip, mask, block_size(n))
}
