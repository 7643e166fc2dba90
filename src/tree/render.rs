//! ASCII rendering of the subnetting tree.
//!
//! The tree is drawn sideways: right subtrees above their parent, left subtrees
//! below, one line per node.

use crate::models::SubnettingNode;

const ROOT_CONNECTOR: &str = "———";
const RIGHT_CONNECTOR: &str = ".———";
const LEFT_CONNECTOR: &str = "`———";
const BLANK: &str = "    ";
const BAR: &str = "   |";

/// Render `root` as indented ASCII art, one `<indent><connector> <mask>[-<name>]` line per node.
///
/// # Examples
/// ```
/// use subnet_tree::processing::networks_flsm;
/// use subnet_tree::tree::{create_tree, tree_to_str};
///
/// let tree = create_tree(&networks_flsm("192.168.0.0", 24, 2).unwrap());
/// assert_eq!(
///     tree_to_str(&tree),
///     "    .——— 25-Net 2\n——— 24\n    `——— 25-Net 1\n"
/// );
/// ```
pub fn tree_to_str(root: &SubnettingNode) -> String {
    let mut out = String::new();
    let mut trunks: Vec<&'static str> = Vec::new();
    render_node(Some(root), &mut trunks, false, &mut out);
    out
}

/// `trunks` holds one prefix segment per ancestor; a child may rewrite its
/// parent's segment, which is how the vertical bars open and close.
fn render_node(
    node: Option<&SubnettingNode>,
    trunks: &mut Vec<&'static str>,
    is_right: bool,
    out: &mut String,
) {
    let Some(node) = node else {
        return;
    };

    let depth = trunks.len();
    let has_parent = depth > 0;
    let mut parent_segment = BLANK;
    trunks.push(BLANK);

    render_node(node.right.as_deref(), trunks, true, out);

    if !has_parent {
        trunks[depth] = ROOT_CONNECTOR;
    } else if is_right {
        trunks[depth] = RIGHT_CONNECTOR;
        parent_segment = BAR;
    } else {
        trunks[depth] = LEFT_CONNECTOR;
        trunks[depth - 1] = parent_segment;
    }

    out.push_str(&trunks.concat());
    out.push(' ');
    out.push_str(&node.to_string());
    out.push('\n');

    if has_parent {
        trunks[depth - 1] = parent_segment;
    }
    trunks[depth] = BAR;

    render_node(node.left.as_deref(), trunks, false, out);
    trunks.pop();
}
