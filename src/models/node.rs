//! Binary subnetting tree node.

use std::fmt;
use std::net::Ipv4Addr;

/// Label of the synthetic leaf covering unallocated space.
pub const FREE_NET: &str = "Free Net";
/// Label of the marker leaf for an allocation that does not align to its depth.
pub const DUMMY_NET: &str = "Dummy Net";

/// One node of the mask-refinement tree.
///
/// Each level down adds one bit to the mask. A node with a name and no
/// children is a leaf: an allocated network or a [`FREE_NET`]/[`DUMMY_NET`] filler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnettingNode {
    pub mask: u8,
    pub subnet: Ipv4Addr,
    pub name: Option<String>,
    pub left: Option<Box<SubnettingNode>>,
    pub right: Option<Box<SubnettingNode>>,
}

impl SubnettingNode {
    pub fn new(mask: u8, subnet: Ipv4Addr) -> SubnettingNode {
        SubnettingNode {
            mask,
            subnet,
            name: None,
            left: None,
            right: None,
        }
    }

    /// Create a named leaf.
    pub fn leaf(mask: u8, subnet: Ipv4Addr, name: &str) -> SubnettingNode {
        SubnettingNode {
            name: Some(name.to_string()),
            ..SubnettingNode::new(mask, subnet)
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn is_free(&self) -> bool {
        self.name.as_deref() == Some(FREE_NET)
    }

    pub fn is_dummy(&self) -> bool {
        self.name.as_deref() == Some(DUMMY_NET)
    }

    /// Number of nodes in this subtree, self included.
    pub fn count_nodes(&self) -> usize {
        1 + self.children().map(|c| c.count_nodes()).sum::<usize>()
    }

    /// Leaves of this subtree, left to right.
    pub fn leaves(&self) -> Vec<&SubnettingNode> {
        if self.is_leaf() {
            return vec![self];
        }
        self.children().flat_map(|c| c.leaves()).collect()
    }

    fn children(&self) -> impl Iterator<Item = &SubnettingNode> {
        self.left.iter().chain(self.right.iter()).map(|c| &**c)
    }
}

impl fmt::Display for SubnettingNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}-{}", self.mask, name),
            None => write!(f, "{}", self.mask),
        }
    }
}
