// cargo watch -x 'fmt' -x 'test'

//! FLSM/VLSM partitioning of IPv4 blocks and the binary subnetting tree behind them.
//!
//! ```
//! use subnet_tree::{build_subnet_tree, ordered_host_vlsm};
//!
//! let result = ordered_host_vlsm("192.168.0.0", 24, &[20, 100, 50]).unwrap();
//! let tree = build_subnet_tree(result);
//! assert_eq!(tree.networks[0].cidr(), "192.168.0.0/25");
//! assert!(tree.tree_str.contains("27-Free Net"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod tree;

pub use error::SubnetError;
pub use models::{Network, Scheme, SubnetInfo, SubnetResult, SubnettingNode};
pub use processing::{host_flsm, host_vlsm, minimum_bits, networks_flsm, ordered_host_vlsm};
pub use tree::{build_subnet_tree, create_tree, get_d3_tree, tree_to_str, SubnetTreeResult};
