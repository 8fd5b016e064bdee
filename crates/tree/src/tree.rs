use std::collections::HashSet;
use std::ops::Range;
use std::rc::Rc;

use gpui::{
    App, AppContext as _, Context, DragMoveEvent, ElementId, Entity, EntityId, FocusHandle,
    InteractiveElement as _, IntoElement, ListSizingBehavior, ParentElement as _, Pixels, Render,
    RenderOnce, SharedString, StatefulInteractiveElement as _, StyleRefinement, Styled,
    UniformListScrollHandle, Window, div, prelude::FluentBuilder as _, px, uniform_list,
};
use gpui_component::list::ListItem;
use gpui_component::scroll::{Scrollbar, ScrollbarState};
use gpui_component::{
    ActiveTheme as _, Icon, IconName, Sizable as _, StyledExt as _, h_flex, v_flex,
};

use crate::drag::DragState;
use crate::expand::{branch_ids, expansion_path};
use crate::icon::{TreeIcon, default_for_kind, resolve_icon};
use crate::node::{NodeKind, TreeNode, find_node};

const CONTEXT: &str = "TreeView";

/// Create a [`TreeView`].
pub fn tree_view(state: &Entity<TreeViewState>) -> TreeView {
    TreeView::new(state)
}

#[derive(Clone)]
struct TreeViewDrag {
    tree_id: EntityId,
    node_id: SharedString,
    label: SharedString,
}

struct DragGhost {
    label: SharedString,
}

impl DragGhost {
    fn new(label: SharedString) -> Self {
        Self { label }
    }
}

impl Render for DragGhost {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .px(px(10.))
            .py(px(6.))
            .rounded(px(8.))
            .bg(theme.popover)
            .border_1()
            .border_color(theme.border)
            .shadow_md()
            .text_color(theme.popover_foreground)
            .text_sm()
            .child(self.label.clone())
    }
}

/// One visible row: a node plus its depth and its branch/leaf kind, the kind
/// computed once per rebuild from the presence of the children sequence.
#[derive(Clone)]
pub struct TreeEntry {
    node: TreeNode,
    depth: usize,
    kind: NodeKind,
}

impl TreeEntry {
    #[inline]
    pub fn node(&self) -> &TreeNode {
        &self.node
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// The recursive visible-row walk: branches contribute their children only
/// while open, leaves never descend.
fn flatten_visible(
    nodes: &[TreeNode],
    open_ids: &HashSet<SharedString>,
    depth: usize,
    out: &mut Vec<TreeEntry>,
) {
    for node in nodes {
        let kind = node.kind();
        let open = kind == NodeKind::Branch && open_ids.contains(&node.id);
        out.push(TreeEntry {
            node: node.clone(),
            depth,
            kind,
        });
        if open {
            if let Some(children) = node.children.as_deref() {
                flatten_visible(children, open_ids, depth + 1, out);
            }
        }
    }
}

/// The open-set a freshly constructed tree starts with. Expand-all pre-opens
/// every branch directly and ignores the initial selection; otherwise the
/// expansion path of the initially selected node (empty when none, or when
/// the id does not exist) is opened.
fn initial_open_ids(
    nodes: &[TreeNode],
    expand_all: bool,
    initial_selected: Option<&str>,
) -> HashSet<SharedString> {
    if expand_all {
        branch_ids(nodes).into_iter().collect()
    } else if let Some(target) = initial_selected {
        expansion_path(nodes, target).into_iter().collect()
    } else {
        HashSet::new()
    }
}

type SelectHandler = Rc<dyn Fn(Option<&TreeNode>, &mut Window, &mut App)>;
type DropHandler = Rc<dyn Fn(&TreeNode, &TreeNode, &mut Window, &mut App)>;

/// State owner for one tree-view instance.
///
/// Selection, expansion, and drag state live here and flow down read-only on
/// each render; rows report interaction back through this entity, never by
/// mutating shared state themselves.
pub struct TreeViewState {
    focus_handle: FocusHandle,
    nodes: Vec<TreeNode>,
    entries: Vec<TreeEntry>,
    open_ids: HashSet<SharedString>,
    selected_id: Option<SharedString>,
    initial_selected_id: Option<SharedString>,
    expand_all: bool,
    drag: DragState,
    drag_over_id: Option<SharedString>,
    default_branch_icon: Option<TreeIcon>,
    default_leaf_icon: Option<TreeIcon>,
    compact: bool,
    indent_width: Pixels,
    scrollbar_state: ScrollbarState,
    scroll_handle: UniformListScrollHandle,
    on_select: Option<SelectHandler>,
    on_drop: Option<DropHandler>,
}

impl TreeViewState {
    pub fn new(cx: &mut App) -> Self {
        Self {
            focus_handle: cx.focus_handle(),
            nodes: Vec::new(),
            entries: Vec::new(),
            open_ids: HashSet::new(),
            selected_id: None,
            initial_selected_id: None,
            expand_all: false,
            drag: DragState::new(),
            drag_over_id: None,
            default_branch_icon: None,
            default_leaf_icon: None,
            compact: false,
            indent_width: px(16.),
            scrollbar_state: ScrollbarState::default(),
            scroll_handle: UniformListScrollHandle::default(),
            on_select: None,
            on_drop: None,
        }
    }

    pub fn nodes(mut self, nodes: impl Into<Vec<TreeNode>>) -> Self {
        self.nodes = nodes.into();
        self.reset_initial_state();
        self
    }

    /// Single-node convenience for trees with one root.
    pub fn node(self, node: TreeNode) -> Self {
        self.nodes(vec![node])
    }

    /// Pre-select a node and pre-open the path to it. Later changes to the
    /// data do not re-derive expansion; this is construction-time only.
    pub fn initial_selected_id(mut self, id: impl Into<SharedString>) -> Self {
        self.initial_selected_id = Some(id.into());
        self.reset_initial_state();
        self
    }

    /// Open every branch initially, regardless of the initial selection.
    pub fn expand_all(mut self, expand_all: bool) -> Self {
        self.expand_all = expand_all;
        self.reset_initial_state();
        self
    }

    pub fn default_branch_icon(mut self, icon: impl Into<TreeIcon>) -> Self {
        self.default_branch_icon = Some(icon.into());
        self
    }

    pub fn default_leaf_icon(mut self, icon: impl Into<TreeIcon>) -> Self {
        self.default_leaf_icon = Some(icon.into());
        self
    }

    /// Tighter row height and smaller text.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn indent_width(mut self, indent_width: Pixels) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Selection-change listener, called with the newly selected node, or
    /// `None` when the selection is cleared.
    pub fn on_select<F>(mut self, on_select: F) -> Self
    where
        F: Fn(Option<&TreeNode>, &mut Window, &mut App) + 'static,
    {
        self.on_select = Some(Rc::new(on_select));
        self
    }

    /// Drop listener, called with `(dragged, target)`. The target is the
    /// synthetic root container (empty id) for drops on the zone beneath the
    /// tree. The tree never reorders its own data; apply the move here and
    /// push the result back with [`TreeViewState::set_nodes`].
    pub fn on_drop<F>(mut self, on_drop: F) -> Self
    where
        F: Fn(&TreeNode, &TreeNode, &mut Window, &mut App) + 'static,
    {
        self.on_drop = Some(Rc::new(on_drop));
        self
    }

    /// Replace the tree data. Expansion and selection keep their
    /// initialize-once semantics: ids that no longer exist simply stop
    /// matching.
    pub fn set_nodes(&mut self, nodes: impl Into<Vec<TreeNode>>, cx: &mut Context<Self>) {
        self.nodes = nodes.into();
        self.drag.cancel();
        self.drag_over_id = None;
        self.rebuild_entries();
        cx.notify();
    }

    pub fn root_nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn selected_id(&self) -> Option<&SharedString> {
        self.selected_id.as_ref()
    }

    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.selected_id
            .as_ref()
            .and_then(|id| find_node(&self.nodes, id))
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_ids.contains(id)
    }

    /// Replace the selection and notify the listener with the full node (or
    /// `None`). No check that the node belongs to the current data.
    pub fn select(&mut self, node: Option<&TreeNode>, window: &mut Window, cx: &mut Context<Self>) {
        self.selected_id = node.map(|node| node.id.clone());
        let on_select = self.on_select.clone();
        let node = node.cloned();
        // Deferred so the listener can update this entity without re-entering it.
        window.defer(cx, move |window, cx| {
            if let Some(on_select) = on_select {
                on_select(node.as_ref(), window, cx);
            }
        });
        cx.notify();
    }

    fn reset_initial_state(&mut self) {
        self.selected_id = self.initial_selected_id.clone();
        self.open_ids = initial_open_ids(
            &self.nodes,
            self.expand_all,
            self.initial_selected_id.as_deref().map(|v| &**v),
        );
        self.rebuild_entries();
    }

    fn rebuild_entries(&mut self) {
        let mut entries = Vec::new();
        flatten_visible(&self.nodes, &self.open_ids, 0, &mut entries);
        self.entries = entries;
    }

    fn toggle_open(&mut self, id: SharedString) {
        if !self.open_ids.remove(&id) {
            self.open_ids.insert(id);
        }
        self.rebuild_entries();
    }

    fn on_row_click(&mut self, ix: usize, window: &mut Window, cx: &mut Context<Self>) {
        let Some(entry) = self.entries.get(ix) else {
            return;
        };
        if entry.node().is_disabled() {
            return;
        }
        let node = entry.node().clone();
        let kind = entry.kind();

        if kind == NodeKind::Branch {
            self.toggle_open(node.id.clone());
        }
        self.selected_id = Some(node.id.clone());

        let handler = node.click_handler().cloned();
        let on_select = self.on_select.clone();
        window.defer(cx, move |window, cx| {
            if let Some(handler) = handler {
                handler(&node, window, cx);
            }
            if let Some(on_select) = on_select {
                on_select(Some(&node), window, cx);
            }
        });
        cx.notify();
    }

    fn on_drag_begin(&mut self, drag: &TreeViewDrag, cx: &mut Context<Self>) {
        if drag.tree_id != cx.entity_id() {
            return;
        }
        let Some(node) = find_node(&self.nodes, &drag.node_id).cloned() else {
            return;
        };
        if self.drag.drag_start(&node) {
            self.drag_over_id = None;
            cx.notify();
        }
    }

    fn on_row_drag_move(
        &mut self,
        ix: usize,
        event: &DragMoveEvent<TreeViewDrag>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !cx.has_active_drag() {
            return;
        }
        let drag = event.drag(cx);
        if drag.tree_id != cx.entity_id() {
            return;
        }

        let (node_id, eligible) = {
            let Some(entry) = self.entries.get(ix) else {
                return;
            };
            (entry.node().id.clone(), self.drag.accepts(entry.node()))
        };

        if event.bounds.contains(&event.event.position) {
            let next = eligible.then_some(node_id);
            if self.drag_over_id != next {
                self.drag_over_id = next;
                cx.notify();
            }
        } else if self.drag_over_id.as_ref() == Some(&node_id) {
            self.drag_over_id = None;
            cx.notify();
        }
    }

    fn on_list_drag_move(
        &mut self,
        event: &DragMoveEvent<TreeViewDrag>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !cx.has_active_drag() {
            return;
        }
        let drag = event.drag(cx);
        if drag.tree_id != cx.entity_id() {
            return;
        }
        if event.bounds.contains(&event.event.position) {
            return;
        }
        if self.drag_over_id.take().is_some() {
            cx.notify();
        }
    }

    fn on_drop_on_row(
        &mut self,
        drag: &TreeViewDrag,
        ix: usize,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.drag_over_id = None;
        if drag.tree_id != cx.entity_id() {
            self.drag.cancel();
            cx.notify();
            return;
        }

        let target = self.entries.get(ix).map(|entry| entry.node().clone());
        let fired = target.and_then(|target| self.drag.drop_on(&target));
        self.notify_drop(fired, window, cx);
    }

    fn on_drop_on_root(
        &mut self,
        drag: &TreeViewDrag,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.drag_over_id = None;
        if drag.tree_id != cx.entity_id() {
            self.drag.cancel();
            cx.notify();
            return;
        }

        let fired = self.drag.drop_on_root();
        self.notify_drop(fired, window, cx);
    }

    fn notify_drop(
        &mut self,
        fired: Option<(TreeNode, TreeNode)>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if let (Some((source, target)), Some(on_drop)) = (fired, self.on_drop.clone()) {
            // Deferred so the listener can update this entity without re-entering it.
            window.defer(cx, move |window, cx| {
                on_drop(&source, &target, window, cx);
            });
        }
        cx.notify();
    }

    fn render_row(
        &self,
        ix: usize,
        entry: &TreeEntry,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> ListItem {
        let theme = cx.theme();
        let muted = theme.muted_foreground;
        let foreground = theme.foreground;

        let node = entry.node();
        let is_branch = entry.kind() == NodeKind::Branch;
        let is_open = is_branch && self.open_ids.contains(&node.id);
        let selected = self.selected_id.as_ref() == Some(&node.id);
        let indent = self.indent_width * entry.depth();

        let chevron = is_branch.then(|| {
            Icon::new(if is_open {
                IconName::ChevronDown
            } else {
                IconName::ChevronRight
            })
            .xsmall()
            .text_color(muted)
        });

        let default_icon = default_for_kind(
            entry.kind(),
            self.default_branch_icon.as_ref(),
            self.default_leaf_icon.as_ref(),
        );
        let icon = resolve_icon(node, is_open, selected, default_icon).map(|icon| {
            icon.to_icon()
                .small()
                .text_color(if selected { foreground } else { muted })
        });

        let actions = selected
            .then(|| node.actions_ref().cloned())
            .flatten()
            .map(|actions| actions(window, cx));

        let content = h_flex()
            .gap_x_2()
            .items_center()
            .w_full()
            .min_w(px(0.))
            .child(
                div()
                    .w(px(16.))
                    .flex_none()
                    .flex()
                    .items_center()
                    .justify_center()
                    .when_some(chevron, |this, chevron| this.child(chevron)),
            )
            .when_some(icon, |this, icon| this.child(icon))
            .child(
                div()
                    .flex_1()
                    .min_w(px(0.))
                    .overflow_hidden()
                    .child(node.label.clone()),
            )
            .when_some(actions, |this, actions| {
                this.child(div().flex_none().child(actions))
            });

        ListItem::new(ix)
            .pl(px(8.) + indent)
            .pr(px(8.))
            .rounded(px(4.))
            .when(self.compact, |this| this.h(px(22.)).text_sm())
            .when(!self.compact, |this| this.h(px(28.)))
            .child(content)
    }
}

impl Render for TreeViewState {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !cx.has_active_drag() && (self.drag.is_dragging() || self.drag_over_id.is_some()) {
            self.drag.cancel();
            self.drag_over_id = None;
        }

        let state_entity = cx.entity();
        let is_dragging = self.drag.is_dragging();
        let drop_target_bg = cx.theme().drop_target;

        v_flex()
            .id("tree-view-state")
            .size_full()
            .relative()
            .child(
                uniform_list("rows", self.entries.len(), {
                    cx.processor(move |state, visible_range: Range<usize>, window, cx| {
                        let drop_target_bg = cx.theme().drop_target;
                        let mut rows = Vec::with_capacity(visible_range.len());
                        for ix in visible_range {
                            let Some(entry) = state.entries.get(ix).cloned() else {
                                continue;
                            };
                            let node = entry.node().clone();
                            let selected = state.selected_id.as_ref() == Some(&node.id);
                            let dragging = cx.has_active_drag()
                                && state
                                    .drag
                                    .source()
                                    .is_some_and(|source| source.id == node.id);
                            let drag_over = state.drag_over_id.as_ref() == Some(&node.id);
                            let disabled = node.is_disabled();

                            let item = state
                                .render_row(ix, &entry, window, cx)
                                .disabled(disabled)
                                .selected(selected)
                                .when(dragging, |this| this.opacity(0.4));

                            let drag_value = TreeViewDrag {
                                tree_id: cx.entity_id(),
                                node_id: node.id.clone(),
                                label: node.label.clone(),
                            };

                            let row = div()
                                .id(ix)
                                .when(drag_over, |this| this.bg(drop_target_bg))
                                .child(item)
                                .on_drag_move::<TreeViewDrag>(cx.listener(
                                    move |this, event, window, cx| {
                                        this.on_row_drag_move(ix, event, window, cx);
                                    },
                                ))
                                .on_drop::<TreeViewDrag>(cx.listener(
                                    move |this, drag, window, cx| {
                                        this.on_drop_on_row(drag, ix, window, cx);
                                    },
                                ))
                                .when(!disabled, |this| {
                                    this.on_click(cx.listener(move |this, _event, window, cx| {
                                        this.on_row_click(ix, window, cx);
                                    }))
                                })
                                .when(!disabled && node.is_draggable(), |this| {
                                    let state_entity = state_entity.clone();
                                    this.on_drag(
                                        drag_value,
                                        move |drag, _cursor_offset, _window, cx| {
                                            state_entity.update(cx, |state, cx| {
                                                state.on_drag_begin(drag, cx);
                                            });
                                            let label = drag.label.clone();
                                            cx.new(|_| DragGhost::new(label))
                                        },
                                    )
                                });

                            rows.push(row);
                        }
                        rows
                    })
                })
                .on_drag_move::<TreeViewDrag>(cx.listener(Self::on_list_drag_move))
                .flex_grow()
                .w_full()
                .track_scroll(self.scroll_handle.clone())
                .with_sizing_behavior(ListSizingBehavior::Auto)
                .into_any_element(),
            )
            .child(
                // Synthetic "move to root" target beneath the rows.
                div()
                    .id("tree-view-root-drop-zone")
                    .w_full()
                    .flex_none()
                    .h(px(24.))
                    .when(is_dragging, |this| this.bg(drop_target_bg))
                    .on_drop::<TreeViewDrag>(cx.listener(|this, drag, window, cx| {
                        this.on_drop_on_root(drag, window, cx);
                    })),
            )
            .child(
                div()
                    .absolute()
                    .top_0()
                    .right_0()
                    .bottom_0()
                    .w(px(12.))
                    .child(Scrollbar::uniform_scroll(
                        &self.scrollbar_state,
                        &self.scroll_handle,
                    )),
            )
    }
}

/// A tree view element that displays hierarchical data with single selection
/// and drag-and-drop.
#[derive(IntoElement)]
pub struct TreeView {
    id: ElementId,
    state: Entity<TreeViewState>,
    style: StyleRefinement,
}

impl TreeView {
    pub fn new(state: &Entity<TreeViewState>) -> Self {
        Self {
            id: ElementId::Name(format!("tree-view-{}", state.entity_id()).into()),
            state: state.clone(),
            style: StyleRefinement::default(),
        }
    }
}

impl Styled for TreeView {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for TreeView {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let focus_handle = self.state.read(cx).focus_handle.clone();

        div()
            .id(self.id)
            .key_context(CONTEXT)
            .track_focus(&focus_handle)
            .size_full()
            .child(self.state)
            .refine_style(&self.style)
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

    fn visible_ids(nodes: &[TreeNode], open_ids: &HashSet<SharedString>) -> Vec<String> {
        let mut entries = Vec::new();
        flatten_visible(nodes, open_ids, 0, &mut entries);
        entries
            .iter()
            .map(|entry| entry.node().id.to_string())
            .collect()
    }

    #[test]
    fn closed_branches_hide_their_subtrees() {
        let nodes = file_tree();
        assert_eq!(
            visible_ids(&nodes, &HashSet::new()),
            vec!["src", "docs", "package.json"]
        );
    }

    #[test]
    fn open_branches_interleave_children_in_order() {
        let nodes = file_tree();
        let open: HashSet<SharedString> = ["src".into(), "components".into()].into();
        assert_eq!(
            visible_ids(&nodes, &open),
            vec![
                "src",
                "components",
                "button.tsx",
                "tree.tsx",
                "docs",
                "package.json"
            ]
        );
    }

    #[test]
    fn depth_tracks_nesting() {
        let nodes = file_tree();
        let open: HashSet<SharedString> = ["src".into(), "components".into()].into();
        let mut entries = Vec::new();
        flatten_visible(&nodes, &open, 0, &mut entries);
        let button = entries
            .iter()
            .find(|entry| entry.node().id.as_ref() == "button.tsx")
            .unwrap();
        assert_eq!(button.depth(), 2);
        assert_eq!(button.kind(), NodeKind::Leaf);
    }

    #[test]
    fn open_leaf_id_does_not_descend() {
        // A leaf id in the open set is inert; only branches expand.
        let nodes = vec![TreeNode::new("leaf", "leaf")];
        let open: HashSet<SharedString> = ["leaf".into()].into();
        assert_eq!(visible_ids(&nodes, &open), vec!["leaf"]);
    }

    #[test]
    fn initial_open_ids_follows_selection_path() {
        let nodes = file_tree();
        let open = initial_open_ids(&nodes, false, Some("button.tsx"));
        assert!(open.contains("src"));
        assert!(open.contains("components"));
        assert!(!open.contains("docs"));

        // First render shows the whole path to the target.
        let ids = visible_ids(&nodes, &open);
        assert!(ids.contains(&"button.tsx".to_string()));
    }

    #[test]
    fn initial_open_ids_is_empty_without_selection() {
        assert!(initial_open_ids(&file_tree(), false, None).is_empty());
    }

    #[test]
    fn initial_open_ids_is_empty_for_unknown_selection() {
        assert!(initial_open_ids(&file_tree(), false, Some("nope")).is_empty());
    }

    #[test]
    fn expand_all_opens_every_branch_regardless_of_selection() {
        let nodes = file_tree();
        let open = initial_open_ids(&nodes, true, Some("readme.md"));
        for id in ["src", "components", "docs"] {
            assert!(open.contains(id), "{id} should be open");
        }
        assert_eq!(visible_ids(&nodes, &open).len(), 7);
    }
}
