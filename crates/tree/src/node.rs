use std::rc::Rc;

use gpui::{AnyElement, App, SharedString, Window};

use crate::icon::TreeIcon;

/// Render callback for a node's auxiliary action content.
pub type NodeActions = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement>;

/// Per-node click callback, invoked in addition to the selection-change
/// notification.
pub type NodeClickHandler = Rc<dyn Fn(&TreeNode, &mut Window, &mut App)>;

/// Whether a node renders as an expandable branch or a terminal leaf.
///
/// Computed from the presence of the children sequence, never stored: a node
/// with `Some(vec![])` children is a branch with no visible content when
/// opened, which is a valid state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Branch,
    Leaf,
}

/// One entry in the hierarchy.
///
/// Ids must be unique across the whole tree, not merely among siblings;
/// selection, expansion-path, and drag-target lookups all key on `id`, and
/// duplicate ids resolve to the first depth-first match.
#[derive(Clone)]
pub struct TreeNode {
    pub id: SharedString,
    pub label: SharedString,
    pub children: Option<Vec<TreeNode>>,
    icon: Option<TreeIcon>,
    selected_icon: Option<TreeIcon>,
    open_icon: Option<TreeIcon>,
    actions: Option<NodeActions>,
    on_click: Option<NodeClickHandler>,
    draggable: bool,
    droppable: bool,
    disabled: bool,
}

impl TreeNode {
    /// Create a leaf node (no children sequence).
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: None,
            icon: None,
            selected_icon: None,
            open_icon: None,
            actions: None,
            on_click: None,
            draggable: false,
            droppable: true,
            disabled: false,
        }
    }

    /// Create a branch node with an empty children sequence.
    pub fn branch(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        let mut node = Self::new(id, label);
        node.children = Some(Vec::new());
        node
    }

    /// Append a child, marking this node a branch if it was a leaf.
    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn children(mut self, children: impl Into<Vec<TreeNode>>) -> Self {
        self.children = Some(children.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<TreeIcon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn selected_icon(mut self, icon: impl Into<TreeIcon>) -> Self {
        self.selected_icon = Some(icon.into());
        self
    }

    pub fn open_icon(mut self, icon: impl Into<TreeIcon>) -> Self {
        self.open_icon = Some(icon.into());
        self
    }

    /// Auxiliary interactive content rendered on this node's row while it is
    /// selected.
    pub fn actions<F>(mut self, actions: F) -> Self
    where
        F: Fn(&mut Window, &mut App) -> AnyElement + 'static,
    {
        self.actions = Some(Rc::new(actions));
        self
    }

    pub fn on_click<F>(mut self, on_click: F) -> Self
    where
        F: Fn(&TreeNode, &mut Window, &mut App) + 'static,
    {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    /// Allow this node to act as a drag source. Defaults to `false`.
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Allow this node to act as a drop target. Defaults to `true`.
    pub fn droppable(mut self, droppable: bool) -> Self {
        self.droppable = droppable;
        self
    }

    /// Suppress all interaction (click, drag-start, drop) while still
    /// rendering the node.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn kind(&self) -> NodeKind {
        if self.children.is_some() {
            NodeKind::Branch
        } else {
            NodeKind::Leaf
        }
    }

    pub fn is_branch(&self) -> bool {
        self.kind() == NodeKind::Branch
    }

    pub fn icon_ref(&self) -> Option<&TreeIcon> {
        self.icon.as_ref()
    }

    pub fn selected_icon_ref(&self) -> Option<&TreeIcon> {
        self.selected_icon.as_ref()
    }

    pub fn open_icon_ref(&self) -> Option<&TreeIcon> {
        self.open_icon.as_ref()
    }

    pub fn actions_ref(&self) -> Option<&NodeActions> {
        self.actions.as_ref()
    }

    pub fn click_handler(&self) -> Option<&NodeClickHandler> {
        self.on_click.as_ref()
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// A node detached by [`remove_node`], with enough context to restore it.
pub struct RemovedNode {
    pub node: TreeNode,
    pub parent_id: Option<SharedString>,
    pub index: usize,
}

/// Find a node anywhere in the forest by id, first depth-first match.
pub fn find_node<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id.as_ref() == id {
            return Some(node);
        }
        if let Some(children) = node.children.as_deref() {
            if let Some(found) = find_node(children, id) {
                return Some(found);
            }
        }
    }
    None
}

pub(crate) fn find_node_mut<'a>(nodes: &'a mut [TreeNode], id: &str) -> Option<&'a mut TreeNode> {
    for node in nodes {
        if node.id.as_ref() == id {
            return Some(node);
        }
        if let Some(children) = node.children.as_deref_mut() {
            if let Some(found) = find_node_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// True if `id` names `node` or any of its descendants.
pub fn subtree_contains(node: &TreeNode, id: &str) -> bool {
    if node.id.as_ref() == id {
        return true;
    }
    node.children
        .as_deref()
        .is_some_and(|children| children.iter().any(|child| subtree_contains(child, id)))
}

/// Detach the first depth-first node matching `id` from the forest.
pub fn remove_node(nodes: &mut Vec<TreeNode>, id: &str) -> Option<RemovedNode> {
    remove_node_inner(nodes, id, None)
}

fn remove_node_inner(
    nodes: &mut Vec<TreeNode>,
    id: &str,
    parent_id: Option<SharedString>,
) -> Option<RemovedNode> {
    for index in 0..nodes.len() {
        if nodes[index].id.as_ref() == id {
            let node = nodes.remove(index);
            return Some(RemovedNode {
                node,
                parent_id,
                index,
            });
        }
    }

    for index in 0..nodes.len() {
        let parent_id = nodes[index].id.clone();
        if let Some(children) = nodes[index].children.as_mut() {
            if let Some(removed) = remove_node_inner(children, id, Some(parent_id)) {
                return Some(removed);
            }
        }
    }

    None
}

/// Append `node` to the children of `parent_id`, or to the root level when
/// `parent_id` is `None`. Returns `false` when the parent does not exist; the
/// forest is left untouched and the node is discarded.
pub fn insert_under(nodes: &mut Vec<TreeNode>, parent_id: Option<&str>, node: TreeNode) -> bool {
    match parent_id {
        None => {
            nodes.push(node);
            true
        }
        Some(parent_id) => match find_node_mut(nodes, parent_id) {
            Some(parent) => {
                parent.children.get_or_insert_with(Vec::new).push(node);
                true
            }
            None => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<TreeNode> {
        vec![
            TreeNode::branch("a", "a")
                .child(TreeNode::new("a1", "a1"))
                .child(TreeNode::branch("a2", "a2").child(TreeNode::new("a2x", "a2x"))),
            TreeNode::new("b", "b"),
        ]
    }

    #[test]
    fn kind_from_children_presence() {
        assert_eq!(TreeNode::new("f", "f").kind(), NodeKind::Leaf);
        assert_eq!(TreeNode::branch("d", "d").kind(), NodeKind::Branch);
        // An empty children sequence still marks a branch.
        assert!(TreeNode::branch("d", "d").children.unwrap().is_empty());
    }

    #[test]
    fn child_builder_promotes_leaf_to_branch() {
        let node = TreeNode::new("d", "d").child(TreeNode::new("f", "f"));
        assert_eq!(node.kind(), NodeKind::Branch);
    }

    #[test]
    fn find_node_is_depth_first() {
        let nodes = forest();
        assert_eq!(find_node(&nodes, "a2x").unwrap().label.as_ref(), "a2x");
        assert!(find_node(&nodes, "missing").is_none());
    }

    #[test]
    fn remove_then_insert_moves_a_subtree() {
        let mut nodes = forest();
        let removed = remove_node(&mut nodes, "a2").unwrap();
        assert_eq!(removed.parent_id.as_deref().map(|v| &**v), Some("a"));
        assert_eq!(removed.index, 1);
        assert!(find_node(&nodes, "a2x").is_none());

        assert!(insert_under(&mut nodes, Some("b"), removed.node));
        assert!(subtree_contains(find_node(&nodes, "b").unwrap(), "a2x"));
    }

    #[test]
    fn insert_under_missing_parent_is_a_noop() {
        let mut nodes = forest();
        assert!(!insert_under(
            &mut nodes,
            Some("missing"),
            TreeNode::new("x", "x")
        ));
        assert!(find_node(&nodes, "x").is_none());
    }

    #[test]
    fn insert_under_root() {
        let mut nodes = forest();
        assert!(insert_under(&mut nodes, None, TreeNode::new("c", "c")));
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[2].id.as_ref(), "c");
    }
}
