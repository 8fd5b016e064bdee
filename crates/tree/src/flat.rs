use serde::{Deserialize, Serialize};

use crate::node::{TreeNode, find_node_mut};

/// Branch/leaf discriminator for flat records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlatRecordKind {
    Folder,
    File,
}

/// One row of a flat, parent-referencing tree description, e.g. as loaded
/// from JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Display label; falls back to the id when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub kind: FlatRecordKind,
}

impl FlatRecord {
    pub fn folder(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            label: None,
            kind: FlatRecordKind::Folder,
        }
    }

    pub fn file(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            label: None,
            kind: FlatRecordKind::File,
        }
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Materialize a flat record list into the nested forest the tree view
/// consumes.
///
/// Every record becomes exactly one node; `folder` records get an empty
/// children sequence up front so they render as expandable even with zero
/// children. A record attaches to its parent, in input order, only when the
/// parent was already materialized; otherwise it becomes a root-level entry.
/// Forward references (child listed before its parent) therefore silently
/// root the child.
pub fn tree_from_flat(records: impl IntoIterator<Item = FlatRecord>) -> Vec<TreeNode> {
    let mut roots: Vec<TreeNode> = Vec::new();

    for record in records {
        let label = record.label.unwrap_or_else(|| record.id.clone());
        let node = match record.kind {
            FlatRecordKind::Folder => TreeNode::branch(record.id, label),
            FlatRecordKind::File => TreeNode::new(record.id, label),
        };

        let mut pending = Some(node);
        if let Some(parent_id) = record.parent_id.as_deref() {
            if let Some(parent) = find_node_mut(&mut roots, parent_id) {
                if let Some(node) = pending.take() {
                    parent.children.get_or_insert_with(Vec::new).push(node);
                }
            }
        }
        if let Some(node) = pending.take() {
            roots.push(node);
        }
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;

    #[test]
    fn folder_with_file_child() {
        let roots = tree_from_flat([FlatRecord::folder("a"), FlatRecord::file("b").parent("a")]);

        assert_eq!(roots.len(), 1);
        let a = &roots[0];
        assert_eq!(a.id.as_ref(), "a");
        assert_eq!(a.kind(), NodeKind::Branch);

        let children = a.children.as_deref().unwrap();
        assert_eq!(children.len(), 1);
        let b = &children[0];
        assert_eq!(b.id.as_ref(), "b");
        // Files carry no children sequence at all.
        assert_eq!(b.kind(), NodeKind::Leaf);
        assert!(b.children.is_none());
    }

    #[test]
    fn rootless_records_become_roots_regardless_of_kind() {
        let roots = tree_from_flat([FlatRecord::file("readme"), FlatRecord::folder("src")]);
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].kind(), NodeKind::Leaf);
        assert_eq!(roots[1].kind(), NodeKind::Branch);
    }

    #[test]
    fn children_attach_in_input_order_through_deep_parents() {
        let roots = tree_from_flat([
            FlatRecord::folder("root"),
            FlatRecord::folder("c1").parent("root"),
            FlatRecord::file("c2").parent("c1"),
            FlatRecord::file("c3").parent("c1"),
        ]);

        assert_eq!(roots.len(), 1);
        let c1 = &roots[0].children.as_deref().unwrap()[0];
        let ids: Vec<_> = c1
            .children
            .as_deref()
            .unwrap()
            .iter()
            .map(|node| node.id.as_ref())
            .collect();
        assert_eq!(ids, vec!["c2", "c3"]);
    }

    #[test]
    fn forward_referenced_parent_silently_roots_the_child() {
        let roots = tree_from_flat([
            FlatRecord::file("orphan").parent("later"),
            FlatRecord::folder("later"),
        ]);

        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].id.as_ref(), "orphan");
        assert!(roots[1].children.as_deref().unwrap().is_empty());
    }

    #[test]
    fn empty_folder_stays_expandable() {
        let roots = tree_from_flat([FlatRecord::folder("empty")]);
        assert_eq!(roots[0].kind(), NodeKind::Branch);
        assert!(roots[0].children.as_deref().unwrap().is_empty());
    }

    #[test]
    fn records_parse_from_json() {
        let records: Vec<FlatRecord> = serde_json::from_str(
            r#"[
                {"id": "src", "type": "folder"},
                {"id": "main", "parentId": "src", "label": "main.rs", "type": "file"}
            ]"#,
        )
        .unwrap();

        let roots = tree_from_flat(records);
        assert_eq!(roots.len(), 1);
        let main = &roots[0].children.as_deref().unwrap()[0];
        assert_eq!(main.label.as_ref(), "main.rs");
    }
}
