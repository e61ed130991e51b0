//! Whole-tree rendering, one line per call.

use calltree_types::CallNode;
use log::debug;

use crate::{
    node::{CallTreeIter, DisplayNode},
    title::DisplayError,
};

/// Pre-order sequence of display nodes for the tree.
pub fn flatten(root: &CallNode) -> CallTreeIter<'_> {
    DisplayNode::make_tree(root)
}

/// Every line of the text tree, root first.
pub fn render_lines(root: &CallNode) -> Result<Vec<String>, DisplayError> {
    debug!("Rendering call tree with {} calls", root.node_count());
    flatten(root).map(|node| node.render()).collect()
}

/// The text tree as a single newline separated string (no trailing newline).
pub fn render_tree(root: &CallNode) -> Result<String, DisplayError> {
    Ok(render_lines(root)?.join("\n"))
}

/// Only the titles, in the same order as the lines of the tree.
pub fn render_titles(root: &CallNode) -> Result<Vec<String>, DisplayError> {
    debug!("Rendering titles for {} calls", root.node_count());
    flatten(root).map(|node| node.title()).collect()
}
