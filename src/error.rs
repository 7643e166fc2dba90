//! Error kinds returned by the subnetting engine.
//!
//! All of these are user-input errors: the same input always fails the same way,
//! so callers should surface the message as-is.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("Invalid IP address.")]
    InvalidAddress,

    #[error("Insufficient hosts mask. Use a bigger mask or set less host per network.")]
    InsufficientHostMask,

    #[error("Insufficient network mask. Use a bigger mask or set less networks.")]
    InsufficientNetworkMask,

    #[error("Invalid mask /{0}.")]
    InvalidMask(u8),

    #[error("Requested capacity must be at least 1.")]
    ZeroCapacity,

    #[error("At least one host count is required.")]
    EmptyHostList,
}
