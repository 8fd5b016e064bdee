mod drag;
mod expand;
mod flat;
mod icon;
mod node;
mod tree;

pub use drag::{DragState, ROOT_TARGET_ID};
pub use expand::{branch_ids, expansion_path};
pub use flat::{FlatRecord, FlatRecordKind, tree_from_flat};
pub use icon::{TreeIcon, resolve_icon};
pub use node::{
    NodeActions, NodeClickHandler, NodeKind, RemovedNode, TreeNode, find_node, insert_under,
    remove_node, subtree_contains,
};
pub use tree::{TreeEntry, TreeView, TreeViewState, tree_view};
