//! Bit widths from capacity requirements.

use crate::error::SubnetError;
use crate::models::MAX_LENGTH;

/// Smallest bit width whose power-of-two capacity covers `count`, i.e. `ceil(log2(count))`.
///
/// # Examples
/// ```
/// use subnet_tree::processing::minimum_bits;
/// assert_eq!(minimum_bits(1).unwrap(), 0);
/// assert_eq!(minimum_bits(5).unwrap(), 3);
/// assert!(minimum_bits(0).is_err());
/// ```
pub fn minimum_bits(count: u64) -> Result<u8, SubnetError> {
    match count {
        0 => Err(SubnetError::ZeroCapacity),
        1 => Ok(0),
        _ => Ok((u64::BITS - (count - 1).leading_zeros()) as u8),
    }
}

/// Bits left after `mask` and `bits` are taken out of 32, or None when they do not fit.
pub fn remaining_bits(mask: u8, bits: u8) -> Option<u8> {
    MAX_LENGTH.checked_sub(mask)?.checked_sub(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_bits() {
        assert_eq!(minimum_bits(1).unwrap(), 0);
        assert_eq!(minimum_bits(2).unwrap(), 1);
        assert_eq!(minimum_bits(3).unwrap(), 2);
        assert_eq!(minimum_bits(4).unwrap(), 2);
        assert_eq!(minimum_bits(5).unwrap(), 3);
        assert_eq!(minimum_bits(32).unwrap(), 5);
        assert_eq!(minimum_bits(33).unwrap(), 6);
        assert_eq!(minimum_bits(1 << 32).unwrap(), 32);
        assert_eq!(minimum_bits(u64::MAX).unwrap(), 64);
    }

    #[test]
    fn test_minimum_bits_zero() {
        assert_eq!(minimum_bits(0).unwrap_err(), SubnetError::ZeroCapacity);
    }

    #[test]
    fn test_remaining_bits() {
        assert_eq!(remaining_bits(24, 2), Some(6));
        assert_eq!(remaining_bits(24, 8), Some(0));
        assert_eq!(remaining_bits(24, 9), None);
        assert_eq!(remaining_bits(33, 0), None);
    }
}
