//! Subnetting tree construction and serialization.
//!
//! - [`builder`] - binary tree from an allocation list
//! - [`render`] - indented ASCII art
//! - [`d3`] - nested structure for visualization widgets

mod builder;
mod d3;
mod render;

pub use builder::create_tree;
pub use d3::{get_d3_tree, D3Attributes, D3Node};
pub use render::tree_to_str;

use crate::models::{Network, SubnetInfo, SubnetResult};
use serde::{Deserialize, Serialize};

/// A partition result together with both renderings of its tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetTreeResult {
    pub networks: Vec<Network>,
    pub tree_str: String,
    pub subnet_info: SubnetInfo,
    pub d3_tree: D3Node,
}

/// Build the tree for `result` and render it both ways.
pub fn build_subnet_tree(result: SubnetResult) -> SubnetTreeResult {
    let tree = create_tree(&result);
    let tree_str = tree_to_str(&tree);
    let d3_tree = get_d3_tree(&tree);
    SubnetTreeResult {
        networks: result.networks,
        tree_str,
        subnet_info: result.subnet_info,
        d3_tree,
    }
}
