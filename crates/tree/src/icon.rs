use gpui::SharedString;
use gpui_component::{Icon, IconName};

use crate::node::{NodeKind, TreeNode};

/// Opaque icon handle carried inside tree data.
///
/// The tree logic only orders these by priority; the rendering layer turns
/// the winning handle into a [`gpui_component::Icon`].
#[derive(Clone)]
pub enum TreeIcon {
    /// A built-in `gpui-component` icon.
    Named(IconName),
    /// An SVG asset path resolved through the application's asset source.
    Path(SharedString),
}

impl TreeIcon {
    pub fn to_icon(&self) -> Icon {
        match self {
            TreeIcon::Named(name) => Icon::new(name.clone()),
            TreeIcon::Path(path) => Icon::empty().path(path.clone()),
        }
    }
}

impl From<IconName> for TreeIcon {
    fn from(name: IconName) -> Self {
        TreeIcon::Named(name)
    }
}

impl From<SharedString> for TreeIcon {
    fn from(path: SharedString) -> Self {
        TreeIcon::Path(path)
    }
}

impl From<&'static str> for TreeIcon {
    fn from(path: &'static str) -> Self {
        TreeIcon::Path(path.into())
    }
}

/// Pick the icon for a node given its render state, resolved fresh on every
/// render.
///
/// Priority: `selected_icon` (while selected) > `open_icon` (while open) >
/// the node's own `icon` > the tree-wide default for its kind > nothing.
pub fn resolve_icon<'a>(
    node: &'a TreeNode,
    is_open: bool,
    is_selected: bool,
    default_icon: Option<&'a TreeIcon>,
) -> Option<&'a TreeIcon> {
    if is_selected {
        if let Some(icon) = node.selected_icon_ref() {
            return Some(icon);
        }
    }
    if is_open {
        if let Some(icon) = node.open_icon_ref() {
            return Some(icon);
        }
    }
    node.icon_ref().or(default_icon)
}

/// Convenience for picking the per-kind default handle.
pub(crate) fn default_for_kind<'a>(
    kind: NodeKind,
    branch_default: Option<&'a TreeIcon>,
    leaf_default: Option<&'a TreeIcon>,
) -> Option<&'a TreeIcon> {
    match kind {
        NodeKind::Branch => branch_default,
        NodeKind::Leaf => leaf_default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(icon: Option<&TreeIcon>) -> Option<&str> {
        match icon {
            Some(TreeIcon::Path(path)) => Some(path.as_ref()),
            _ => None,
        }
    }

    fn node_with_all_icons() -> TreeNode {
        TreeNode::branch("n", "n")
            .icon("icons/own.svg")
            .selected_icon("icons/selected.svg")
            .open_icon("icons/open.svg")
    }

    #[test]
    fn selected_beats_open_beats_own() {
        let node = node_with_all_icons();
        assert_eq!(
            path_of(resolve_icon(&node, true, true, None)),
            Some("icons/selected.svg")
        );
        assert_eq!(
            path_of(resolve_icon(&node, true, false, None)),
            Some("icons/open.svg")
        );
        assert_eq!(
            path_of(resolve_icon(&node, false, false, None)),
            Some("icons/own.svg")
        );
    }

    #[test]
    fn selected_icon_requires_selection() {
        let node = TreeNode::new("n", "n").selected_icon("icons/selected.svg");
        assert!(resolve_icon(&node, false, false, None).is_none());
    }

    #[test]
    fn falls_back_to_tree_default_then_nothing() {
        let node = TreeNode::new("n", "n");
        let default = TreeIcon::from("icons/default.svg");
        assert_eq!(
            path_of(resolve_icon(&node, false, false, Some(&default))),
            Some("icons/default.svg")
        );
        assert!(resolve_icon(&node, false, false, None).is_none());
    }
}
