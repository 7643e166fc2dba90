//! Address block partitioning.
//!
//! This module contains the subnetting algorithms:
//! - [`capacity`] - Bit widths from host/network counts
//! - [`flsm`] - Fixed-length subnet masking
//! - [`vlsm`] - Variable-length subnet masking

mod capacity;
mod flsm;
mod vlsm;

// Re-export public functions
pub use capacity::{minimum_bits, remaining_bits};
pub use flsm::{host_flsm, networks_flsm};
pub use vlsm::{host_vlsm, ordered_host_vlsm};
