use gpui::SharedString;

use crate::node::TreeNode;

/// Compute the ordered root-to-target id path that must be pre-opened so the
/// target is visible.
///
/// Depth-first with sibling order preserved; the first matching node wins.
/// Returns an empty path (never a partial one) when the id is absent.
pub fn expansion_path(nodes: &[TreeNode], target_id: &str) -> Vec<SharedString> {
    let mut path = Vec::new();
    if walk(nodes, target_id, &mut path) {
        path
    } else {
        Vec::new()
    }
}

fn walk(nodes: &[TreeNode], target_id: &str, path: &mut Vec<SharedString>) -> bool {
    for node in nodes {
        path.push(node.id.clone());
        if node.id.as_ref() == target_id {
            return true;
        }
        if let Some(children) = node.children.as_deref() {
            if walk(children, target_id, path) {
                return true;
            }
        }
        path.pop();
    }
    false
}

/// Every branch id in the forest, depth-first.
///
/// Expand-all is implemented by pre-opening all of these directly; it is a
/// separate operation from path computation, not a special path value.
pub fn branch_ids(nodes: &[TreeNode]) -> Vec<SharedString> {
    let mut ids = Vec::new();
    collect_branch_ids(nodes, &mut ids);
    ids
}

fn collect_branch_ids(nodes: &[TreeNode], ids: &mut Vec<SharedString>) {
    for node in nodes {
        if let Some(children) = node.children.as_deref() {
            ids.push(node.id.clone());
            collect_branch_ids(children, ids);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_tree() -> Vec<TreeNode> {
        vec![
            TreeNode::branch("src", "src").child(
                TreeNode::branch("components", "components")
                    .child(TreeNode::new("button.tsx", "button.tsx"))
                    .child(TreeNode::new("tree.tsx", "tree.tsx")),
            ),
            TreeNode::branch("docs", "docs").child(TreeNode::new("readme.md", "readme.md")),
            TreeNode::new("package.json", "package.json"),
        ]
    }

    #[test]
    fn path_is_root_to_target_inclusive() {
        let path = expansion_path(&file_tree(), "button.tsx");
        assert_eq!(path, vec!["src", "components", "button.tsx"]);
    }

    #[test]
    fn path_length_matches_depth() {
        let nodes = file_tree();
        assert_eq!(expansion_path(&nodes, "src").len(), 1);
        assert_eq!(expansion_path(&nodes, "components").len(), 2);
        assert_eq!(expansion_path(&nodes, "tree.tsx").len(), 3);
    }

    #[test]
    fn missing_target_yields_empty_path() {
        assert!(expansion_path(&file_tree(), "nope").is_empty());
    }

    #[test]
    fn sibling_order_is_preserved() {
        let path = expansion_path(&file_tree(), "readme.md");
        assert_eq!(path, vec!["docs", "readme.md"]);
    }

    #[test]
    fn first_depth_first_match_wins_on_duplicate_ids() {
        let nodes = vec![
            TreeNode::branch("a", "a").child(TreeNode::new("dup", "first")),
            TreeNode::branch("b", "b").child(TreeNode::new("dup", "second")),
        ];
        assert_eq!(expansion_path(&nodes, "dup"), vec!["a", "dup"]);
    }

    #[test]
    fn branch_ids_covers_every_branch() {
        let ids = branch_ids(&file_tree());
        assert_eq!(ids, vec!["src", "components", "docs"]);
    }

    #[test]
    fn empty_branch_is_still_a_branch() {
        let nodes = vec![TreeNode::branch("empty", "empty")];
        assert_eq!(branch_ids(&nodes), vec!["empty"]);
    }
}
