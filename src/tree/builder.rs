//! Rebuilds the binary subnetting tree from a flat allocation list.

use crate::models::{
    add_offset, block_size, Network, SubnetResult, SubnettingNode, DUMMY_NET, FREE_NET, MAX_LENGTH,
};
use itertools::Itertools;
use std::cmp::Ordering;
use std::net::Ipv4Addr;

/// Build the mask-refinement tree for a partition result.
///
/// The root carries the initial mask and address. Every level down splits a
/// block in two until the depth matches the mask of the next network in
/// allocation order. Space left over after the last network becomes a
/// "Free Net" leaf; a network that does not line up with its depth gets a
/// "Dummy Net" marker in its place.
///
/// Networks the walk never reaches (possible when VLSM blocks were allocated
/// smallest first) are left out of the tree and logged as a warning.
pub fn create_tree(result: &SubnetResult) -> SubnettingNode {
    let info = &result.subnet_info;
    if result.networks.is_empty() {
        return SubnettingNode::new(info.initial_mask, info.initial_ip);
    }

    let (root, consumed) = build_node(info.initial_mask, info.initial_ip, 0, &result.networks);
    log::debug!(
        "create_tree {}/{}: {} nodes, {consumed} of {} networks placed",
        info.initial_ip,
        info.initial_mask,
        root.count_nodes(),
        result.networks.len()
    );
    if consumed < result.networks.len() {
        log::warn!(
            "create_tree {}/{}: networks not placed in the tree: {}",
            info.initial_ip,
            info.initial_mask,
            result.networks[consumed..]
                .iter()
                .map(|net| format!("{} {}", net.name, net.cidr()))
                .join(", ")
        );
    }
    root
}

/// Build the node at `mask`/`subnet` while `networks[cursor]` is the next network to place.
///
/// Returns the node and the cursor after everything placed below it.
/// Callers guarantee `cursor < networks.len()`.
fn build_node(
    mask: u8,
    subnet: Ipv4Addr,
    cursor: usize,
    networks: &[Network],
) -> (SubnettingNode, usize) {
    let target = &networks[cursor];
    let mut node = SubnettingNode::new(mask, subnet);
    log::trace!("build_node /{mask} {subnet} cursor={cursor} target={}", target.cidr());

    // a mask past /32 can never be reached by splitting
    let order = if target.mask > MAX_LENGTH {
        Ordering::Greater
    } else {
        mask.cmp(&target.mask)
    };

    match order {
        Ordering::Equal => {
            node.name = Some(target.name.clone());
            (node, cursor + 1)
        }
        Ordering::Less => {
            let (left, after_left) = build_node(mask + 1, target.subnet, cursor, networks);
            node.left = Some(Box::new(left));

            let after_right = match networks.get(after_left) {
                None => {
                    let free = add_offset(target.subnet, block_size(MAX_LENGTH - mask - 1));
                    node.right = Some(Box::new(SubnettingNode::leaf(mask + 1, free, FREE_NET)));
                    after_left
                }
                Some(next) => {
                    let (right, after_right) = build_node(mask + 1, next.subnet, after_left, networks);
                    node.right = Some(Box::new(right));
                    after_right
                }
            };
            (node, after_right)
        }
        Ordering::Greater => {
            log::warn!(
                "{} does not align at /{mask}, marking {subnet} as {DUMMY_NET}",
                target.cidr()
            );
            node.name = Some(DUMMY_NET.to_string());
            (node, cursor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{host_vlsm, networks_flsm, ordered_host_vlsm};

    fn names(root: &SubnettingNode) -> Vec<String> {
        root.leaves()
            .iter()
            .map(|leaf| leaf.to_string())
            .collect()
    }

    #[test]
    fn test_create_tree_flsm() {
        let result = networks_flsm("192.168.0.0", 24, 4).unwrap();
        let root = create_tree(&result);
        assert_eq!(root.mask, 24);
        assert_eq!(root.name, None);
        assert_eq!(root.count_nodes(), 7);
        assert_eq!(
            names(&root),
            vec!["26-Net 1", "26-Net 2", "26-Net 3", "26-Net 4"]
        );

        let right = root.right.as_ref().unwrap();
        assert_eq!(right.mask, 25);
        assert_eq!(right.subnet, Ipv4Addr::new(192, 168, 0, 128));
        assert_eq!(
            right.left.as_ref().unwrap().subnet,
            Ipv4Addr::new(192, 168, 0, 128)
        );
    }

    #[test]
    fn test_create_tree_free_net() {
        let result = ordered_host_vlsm("192.168.0.0", 24, &[100, 50, 20]).unwrap();
        let root = create_tree(&result);
        assert_eq!(root.count_nodes(), 7);
        assert_eq!(
            names(&root),
            vec!["25-Net 1", "26-Net 2", "27-Net 3", "27-Free Net"]
        );

        let free = *root.leaves().last().unwrap();
        assert!(free.is_free());
        assert_eq!(free.subnet, Ipv4Addr::new(192, 168, 0, 224));
    }

    #[test]
    fn test_create_tree_single_network() {
        let result = networks_flsm("10.0.0.0", 24, 1).unwrap();
        let root = create_tree(&result);
        assert!(root.is_leaf());
        assert_eq!(root.to_string(), "24-Net 1");
    }

    #[test]
    fn test_create_tree_unaligned_gets_dummy() {
        let result = host_vlsm("192.168.0.0", 24, &[10, 100]).unwrap();
        let root = create_tree(&result);
        let leaves = root.leaves();
        assert_eq!(leaves.iter().filter(|l| l.is_dummy()).count(), 3);
        assert_eq!(leaves.first().unwrap().to_string(), "28-Net 1");
        assert_eq!(leaves.last().unwrap().to_string(), "25-Net 2");
        assert!(leaves.iter().all(|l| l.name.is_some()));
    }

    #[test]
    fn test_create_tree_smallest_first_drops_unreached() {
        let result = host_vlsm("192.168.0.0", 24, &[10, 100, 50]).unwrap();
        let root = create_tree(&result);
        let real: Vec<String> = root
            .leaves()
            .iter()
            .filter(|l| !l.is_free() && !l.is_dummy())
            .map(|l| l.to_string())
            .collect();
        assert_eq!(real, vec!["28-Net 1", "25-Net 2"]);
        assert_eq!(root.leaves().iter().filter(|l| l.is_dummy()).count(), 3);

        let text = crate::tree::tree_to_str(&root);
        assert!(!text.contains("Net 3"));
        assert_eq!(text.lines().count(), root.count_nodes());
    }

    #[test]
    fn test_create_tree_mask_past_32_is_dummy() {
        let mut result = networks_flsm("10.0.0.0", 24, 2).unwrap();
        result.networks[1].mask = 40;
        let root = create_tree(&result);
        assert_eq!(
            names(&root),
            vec!["25-Net 1", "25-Dummy Net"]
        );

        let mut result = networks_flsm("10.0.0.0", 31, 2).unwrap();
        result.networks[0].mask = 33;
        let root = create_tree(&result);
        assert!(root.is_dummy());
    }

    #[test]
    fn test_every_network_becomes_a_leaf() {
        let result = ordered_host_vlsm("10.0.0.0", 16, &[500, 200, 120, 60, 30, 2]).unwrap();
        let root = create_tree(&result);
        let real: Vec<&SubnettingNode> = root
            .leaves()
            .into_iter()
            .filter(|l| !l.is_free() && !l.is_dummy())
            .collect();
        assert_eq!(real.len(), result.networks.len());
        for (leaf, net) in real.iter().zip(&result.networks) {
            assert_eq!(leaf.name.as_deref(), Some(net.name.as_str()));
            assert_eq!(leaf.mask, net.mask);
            assert_eq!(leaf.subnet, net.subnet);
        }
    }
}
