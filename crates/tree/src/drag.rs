use crate::node::TreeNode;

/// Identifier carried by the synthetic "move to root" drop target.
pub const ROOT_TARGET_ID: &str = "";

/// Drag-and-drop arbitration for one tree instance.
///
/// Two states: idle, or dragging a single source node. The machine only
/// arbitrates — it never reorders the hierarchy; the drop callback receiver
/// performs any real move. Platform event plumbing lives in the renderer, so
/// this is unit-testable without a UI surface.
#[derive(Default)]
pub struct DragState {
    source: Option<TreeNode>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&TreeNode> {
        self.source.as_ref()
    }

    /// Begin dragging `node`. Rejected (no state transition) when the node is
    /// not draggable or is disabled.
    pub fn drag_start(&mut self, node: &TreeNode) -> bool {
        if !node.is_draggable() || node.is_disabled() {
            return false;
        }
        self.source = Some(node.clone());
        true
    }

    /// Whether `target` is a valid drop candidate right now: a drag must be
    /// in progress, the target droppable and enabled, and not the dragged
    /// node itself.
    pub fn accepts(&self, target: &TreeNode) -> bool {
        let Some(source) = self.source.as_ref() else {
            return false;
        };
        target.is_droppable() && !target.is_disabled() && target.id != source.id
    }

    /// Complete the drag on `target`. Returns the `(source, target)` pair for
    /// the drop callback when the target is eligible; the machine returns to
    /// idle either way.
    pub fn drop_on(&mut self, target: &TreeNode) -> Option<(TreeNode, TreeNode)> {
        let eligible = self.accepts(target);
        let source = self.source.take()?;
        eligible.then(|| (source, target.clone()))
    }

    /// Complete the drag on the zone beneath the tree. Fires with a synthetic
    /// root-container target whenever a drag is in progress; no droppable or
    /// disabled gating applies to this zone.
    pub fn drop_on_root(&mut self) -> Option<(TreeNode, TreeNode)> {
        let source = self.source.take()?;
        Some((source, TreeNode::branch(ROOT_TARGET_ID, ROOT_TARGET_ID)))
    }

    pub fn cancel(&mut self) {
        self.source = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draggable(id: &'static str) -> TreeNode {
        TreeNode::new(id, id).draggable(true)
    }

    #[test]
    fn drag_start_requires_draggable() {
        let mut drag = DragState::new();
        assert!(!drag.drag_start(&TreeNode::new("a", "a")));
        assert!(!drag.is_dragging());
        assert!(drag.drag_start(&draggable("a")));
        assert!(drag.is_dragging());
    }

    #[test]
    fn drag_start_rejects_disabled() {
        let mut drag = DragState::new();
        assert!(!drag.drag_start(&draggable("a").disabled(true)));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn nothing_accepted_while_idle() {
        let drag = DragState::new();
        assert!(!drag.accepts(&TreeNode::new("b", "b")));
    }

    #[test]
    fn self_drop_never_fires() {
        let mut drag = DragState::new();
        let a = draggable("a");
        drag.drag_start(&a);
        assert!(!drag.accepts(&a));
        assert!(drag.drop_on(&a).is_none());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drop_fires_iff_target_is_eligible() {
        let mut drag = DragState::new();
        drag.drag_start(&draggable("a"));
        let (source, target) = drag.drop_on(&TreeNode::new("b", "b")).unwrap();
        assert_eq!(source.id.as_ref(), "a");
        assert_eq!(target.id.as_ref(), "b");
        assert!(!drag.is_dragging());
    }

    #[test]
    fn ineligible_drop_still_resets_to_idle() {
        for target in [
            TreeNode::new("b", "b").droppable(false),
            TreeNode::new("b", "b").disabled(true),
        ] {
            let mut drag = DragState::new();
            drag.drag_start(&draggable("a"));
            assert!(!drag.accepts(&target));
            assert!(drag.drop_on(&target).is_none());
            assert!(!drag.is_dragging());
        }
    }

    #[test]
    fn root_zone_skips_eligibility_checks() {
        let mut drag = DragState::new();
        drag.drag_start(&draggable("a"));
        let (source, target) = drag.drop_on_root().unwrap();
        assert_eq!(source.id.as_ref(), "a");
        assert_eq!(target.id.as_ref(), ROOT_TARGET_ID);
        assert!(!drag.is_dragging());

        // Idle root drops fire nothing.
        assert!(drag.drop_on_root().is_none());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut drag = DragState::new();
        drag.drag_start(&draggable("a"));
        drag.cancel();
        assert!(!drag.is_dragging());
        assert!(drag.drop_on(&TreeNode::new("b", "b")).is_none());
    }
}
