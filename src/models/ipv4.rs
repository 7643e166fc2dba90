//! IPv4 address utilities.
//!
//! Parsing and validation of dotted-quad strings, plus the octet arithmetic
//! the partitioner uses to walk through an address block.

use crate::error::SubnetError;
use regex::Regex;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Four dot separated groups of 1-3 decimal digits.
static DOTTED_QUAD_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_dotted_quad_regex() -> &'static Regex {
    DOTTED_QUAD_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex")
    })
}

/// Split a dotted-quad string into its four octets.
///
/// # Examples
/// ```
/// use subnet_tree::models::parse_octets;
/// assert_eq!(parse_octets("192.168.1.1").unwrap(), [192, 168, 1, 1]);
/// assert!(parse_octets("192.168.1.256").is_err());
/// ```
pub fn parse_octets(ip: &str) -> Result<[u8; 4], SubnetError> {
    let caps = get_dotted_quad_regex()
        .captures(ip.trim())
        .ok_or(SubnetError::InvalidAddress)?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1]
            .parse::<u8>()
            .map_err(|_| SubnetError::InvalidAddress)?;
    }
    Ok(octets)
}

/// Parse a dotted-quad string into an [`Ipv4Addr`].
pub fn parse_address(ip: &str) -> Result<Ipv4Addr, SubnetError> {
    parse_octets(ip).map(Ipv4Addr::from)
}

/// True iff `ip` has exactly four octets, each in `0..=255`.
pub fn is_valid_ip(ip: &str) -> bool {
    parse_octets(ip).is_ok()
}

/// The address right after `addr`, carrying into the higher octets.
pub fn next_address(addr: Ipv4Addr) -> Ipv4Addr {
    add_offset(addr, 1)
}

/// The address right before `addr`, borrowing from the higher octets.
pub fn previous_address(addr: Ipv4Addr) -> Ipv4Addr {
    let mut octets = addr.octets();
    for octet in octets.iter_mut().rev() {
        if *octet > 0 {
            *octet -= 1;
            return Ipv4Addr::from(octets);
        }
        *octet = 255;
    }
    // borrowed past the first octet
    Ipv4Addr::from(octets)
}

/// Add `count` hosts to `addr`, propagating the carry from the last octet leftward.
///
/// A carry out of the first octet is dropped.
pub fn add_offset(addr: Ipv4Addr, count: u64) -> Ipv4Addr {
    let mut octets = addr.octets();
    let mut carry = count;
    for octet in octets.iter_mut().rev() {
        let sum = u64::from(*octet) + carry;
        *octet = (sum % 256) as u8;
        carry = sum / 256;
    }
    Ipv4Addr::from(octets)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_tree::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::InvalidMask(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Dotted form of a prefix length, e.g. `/26` -> `255.255.255.192`.
pub fn netmask(len: u8) -> Result<Ipv4Addr, SubnetError> {
    get_cidr_mask(len).map(Ipv4Addr::from)
}

/// Number of addresses in a block with `host_bits` host bits.
pub fn block_size(host_bits: u8) -> u64 {
    1u64 << host_bits
}

/// Binary form of an address, one 8-bit group per octet.
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|o| format!("{o:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// Parse the dotted binary form produced by [`to_binary`].
pub fn from_binary(bits: &str) -> Result<Ipv4Addr, SubnetError> {
    let groups: Vec<&str> = bits.trim().split('.').collect();
    if groups.len() != 4 {
        return Err(SubnetError::InvalidAddress);
    }
    let mut octets = [0u8; 4];
    for (octet, group) in octets.iter_mut().zip(groups) {
        if group.is_empty() || group.len() > 8 {
            return Err(SubnetError::InvalidAddress);
        }
        *octet = u8::from_str_radix(group, 2).map_err(|_| SubnetError::InvalidAddress)?;
    }
    Ok(Ipv4Addr::from(octets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ip() {
        assert!(is_valid_ip("192.168.1.1"));
        assert!(is_valid_ip("0.0.0.0"));
        assert!(is_valid_ip("255.255.255.255"));
        assert!(!is_valid_ip("192.168.1.256"));
        assert!(!is_valid_ip("1.2.3"));
        assert!(!is_valid_ip("1.2.3.4.5"));
        assert!(!is_valid_ip("a.b.c.d"));
        assert!(!is_valid_ip("10.0.0.-1"));
        assert!(!is_valid_ip(""));
    }

    #[test]
    fn test_parse_octets() {
        assert_eq!(parse_octets("10.20.30.40").unwrap(), [10, 20, 30, 40]);
        assert_eq!(parse_octets(" 10.0.0.1 ").unwrap(), [10, 0, 0, 1]);
        assert_eq!(
            parse_octets("300.0.0.1").unwrap_err(),
            SubnetError::InvalidAddress
        );
    }

    #[test]
    fn test_next_address() {
        let ip = Ipv4Addr::new(192, 168, 1, 1);
        assert_eq!(next_address(ip), Ipv4Addr::new(192, 168, 1, 2));
        let ip = Ipv4Addr::new(192, 168, 1, 255);
        assert_eq!(next_address(ip), Ipv4Addr::new(192, 168, 2, 0));
        let ip = Ipv4Addr::new(10, 255, 255, 255);
        assert_eq!(next_address(ip), Ipv4Addr::new(11, 0, 0, 0));
    }

    #[test]
    fn test_previous_address() {
        let ip = Ipv4Addr::new(192, 168, 1, 1);
        assert_eq!(previous_address(ip), Ipv4Addr::new(192, 168, 1, 0));
        let ip = Ipv4Addr::new(192, 168, 2, 0);
        assert_eq!(previous_address(ip), Ipv4Addr::new(192, 168, 1, 255));
        let ip = Ipv4Addr::new(11, 0, 0, 0);
        assert_eq!(previous_address(ip), Ipv4Addr::new(10, 255, 255, 255));
    }

    #[test]
    fn test_next_previous_round_trip() {
        for ip in [
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(172, 16, 0, 0),
            Ipv4Addr::new(192, 168, 255, 255),
        ] {
            assert_eq!(next_address(previous_address(ip)), ip);
            assert_eq!(previous_address(next_address(ip)), ip);
        }
    }

    #[test]
    fn test_add_offset() {
        let ip = Ipv4Addr::new(192, 168, 0, 0);
        assert_eq!(add_offset(ip, 64), Ipv4Addr::new(192, 168, 0, 64));
        assert_eq!(add_offset(ip, 256), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(add_offset(ip, 65536), Ipv4Addr::new(192, 169, 0, 0));
        let ip = Ipv4Addr::new(10, 0, 0, 200);
        assert_eq!(add_offset(ip, 100), Ipv4Addr::new(10, 0, 1, 44));
        assert_eq!(add_offset(ip, 0), ip);
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert_eq!(get_cidr_mask(33).unwrap_err(), SubnetError::InvalidMask(33));
    }

    #[test]
    fn test_netmask() {
        assert_eq!(netmask(26).unwrap(), Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(netmask(16).unwrap(), Ipv4Addr::new(255, 255, 0, 0));
    }

    #[test]
    fn test_binary() {
        let ip = Ipv4Addr::new(192, 168, 1, 5);
        let bits = to_binary(ip);
        assert_eq!(bits, "11000000.10101000.00000001.00000101");
        assert_eq!(from_binary(&bits).unwrap(), ip);
        assert_eq!(from_binary("101.1.0.0").unwrap(), Ipv4Addr::new(5, 1, 0, 0));
        assert!(from_binary("11000000.10101000.00000001").is_err());
        assert!(from_binary("2.0.0.0").is_err());
    }
}
