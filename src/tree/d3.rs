//! Nested node structure for tree visualization widgets.

use crate::models::SubnettingNode;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct D3Attributes {
    pub mask: u8,
    pub subnet: Ipv4Addr,
}

/// `{name, attributes: {mask, subnet}, children?: [left, right]}`.
///
/// `children` is only present on internal nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct D3Node {
    pub name: String,
    pub attributes: D3Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<D3Node>>,
}

pub fn get_d3_tree(root: &SubnettingNode) -> D3Node {
    let children = root.left.as_ref().map(|left| {
        std::iter::once(left)
            .chain(root.right.as_ref())
            .map(|child| get_d3_tree(child))
            .collect()
    });

    D3Node {
        name: root.to_string(),
        attributes: D3Attributes {
            mask: root.mask,
            subnet: root.subnet,
        },
        children,
    }
}
