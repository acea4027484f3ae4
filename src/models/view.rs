//! Derived view state for the current navigation target.

use super::node::{FileNode, Node};

/// What the current path resolves to.
///
/// This is derived, never stored: it is recomputed from `(tree, path)` on
/// every navigation or tree change. All three outcomes are ordinary values;
/// resolution never fails.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState {
    /// A folder's children (or the root items for the empty path).
    Listing(Vec<Node>),
    /// A single file's detail page.
    FileDetail(FileNode),
    /// The path matched nothing in the tree.
    NotFound,
}
