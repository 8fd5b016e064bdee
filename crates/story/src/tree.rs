use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::{IconName, Sizable as _, h_flex, v_flex};

use gpui_arbor_tree::{
    ROOT_TARGET_ID, TreeNode, TreeViewState, insert_under, remove_node, subtree_contains,
    tree_view,
};

pub struct TreeStory {
    explorer: Entity<TreeViewState>,
    outline: Entity<TreeViewState>,
    last_click: Option<SharedString>,
    last_drop: Option<SharedString>,
}

impl TreeStory {
    pub fn view(_window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(Self::new)
    }

    fn new(cx: &mut Context<Self>) -> Self {
        let story = cx.entity();

        let explorer = cx.new(|cx| {
            TreeViewState::new(cx)
                .nodes(explorer_nodes(story.clone()))
                .initial_selected_id("button.tsx")
                .default_branch_icon(IconName::Folder)
                .default_leaf_icon(IconName::File)
                .on_select({
                    let story = story.clone();
                    move |_node, _window, cx| {
                        story.update(cx, |_, cx| cx.notify());
                    }
                })
                .on_drop({
                    let story = story.clone();
                    move |source, target, _window, cx| {
                        let source = source.clone();
                        let target = target.clone();
                        story.update(cx, |this, cx| this.apply_drop(&source, &target, cx));
                    }
                })
        });

        let outline = cx.new(|cx| {
            TreeViewState::new(cx)
                .nodes(outline_nodes())
                .expand_all(true)
                .compact(true)
                .default_branch_icon(IconName::Folder)
                .default_leaf_icon(IconName::File)
        });

        Self {
            explorer,
            outline,
            last_click: None,
            last_drop: None,
        }
    }

    fn apply_drop(&mut self, source: &TreeNode, target: &TreeNode, cx: &mut Context<Self>) {
        let to_root = target.id.as_ref() == ROOT_TARGET_ID;
        // Dropping a folder into its own subtree would orphan it.
        if !to_root && subtree_contains(source, &target.id) {
            return;
        }

        let mut nodes = self.explorer.read(cx).root_nodes().to_vec();
        let Some(removed) = remove_node(&mut nodes, &source.id) else {
            return;
        };
        let parent_id = (!to_root).then(|| target.id.clone());
        if !insert_under(&mut nodes, parent_id.as_deref().map(|v| &**v), removed.node) {
            return;
        }

        let target_label = if to_root {
            SharedString::from("root")
        } else {
            target.label.clone()
        };
        self.last_drop = Some(format!("{} → {}", source.label, target_label).into());
        self.explorer.update(cx, |tree, cx| tree.set_nodes(nodes, cx));
        cx.notify();
    }
}

impl Render for TreeStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let selected = self
            .explorer
            .read(cx)
            .selected_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "<none>".to_string());
        let structure = format_tree(self.explorer.read(cx).root_nodes());

        v_flex()
            .size_full()
            .p(px(16.))
            .gap_y_3()
            .child(
                v_flex()
                    .gap_y_1()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child("Tree View"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child("Click rows to select (branches also toggle). Drag rows onto folders to move them; the strip below the rows moves to the root. The lock file is disabled and inert."),
                    ),
            )
            .child(
                h_flex()
                    .flex_1()
                    .min_h(px(0.))
                    .gap_x_3()
                    .items_start()
                    .child(
                        v_flex()
                            .w(px(380.))
                            .min_w(px(0.))
                            .h_full()
                            .gap_y_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .child("Explorer"),
                            )
                            .child(
                                div()
                                    .flex_1()
                                    .min_h(px(0.))
                                    .rounded(px(12.))
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.background)
                                    .child(tree_view(&self.explorer)),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .child("Outline (compact, expand-all)"),
                            )
                            .child(
                                div()
                                    .h(px(180.))
                                    .rounded(px(12.))
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.background)
                                    .child(tree_view(&self.outline)),
                            ),
                    )
                    .child(
                        v_flex()
                            .flex_1()
                            .min_w(px(0.))
                            .h_full()
                            .gap_y_2()
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .child("Debug"),
                            )
                            .child(
                                v_flex()
                                    .flex_1()
                                    .min_h(px(0.))
                                    .rounded(px(12.))
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.background)
                                    .p(px(12.))
                                    .gap_y_1()
                                    .child(div().text_sm().child(format!("Selected: {selected}")))
                                    .child(div().text_sm().when_some(
                                        self.last_click.clone(),
                                        |this, label| this.child(format!("Last onClick: {label}")),
                                    ))
                                    .child(div().text_sm().when_some(
                                        self.last_drop.clone(),
                                        |this, label| this.child(format!("Last drop: {label}")),
                                    ))
                                    .child(
                                        div()
                                            .mt_2()
                                            .text_sm()
                                            .text_color(theme.muted_foreground)
                                            .child("Structure"),
                                    )
                                    .children(structure.lines().map(|line| {
                                        div().text_sm().child(line.to_string())
                                    })),
                            ),
                    ),
            )
    }
}

fn explorer_nodes(story: Entity<TreeStory>) -> Vec<TreeNode> {
    vec![
        TreeNode::branch("src", "src")
            .draggable(true)
            .open_icon(IconName::FolderOpen)
            .child(
                TreeNode::branch("components", "components")
                    .draggable(true)
                    .open_icon(IconName::FolderOpen)
                    .child(
                        TreeNode::new("button.tsx", "button.tsx")
                            .draggable(true)
                            .selected_icon(IconName::Pen)
                            .actions(|_window, _cx| {
                                Button::new("button-tsx-actions")
                                    .icon(IconName::Ellipsis)
                                    .ghost()
                                    .xsmall()
                                    .into_any_element()
                            }),
                    )
                    .child(TreeNode::new("tree.tsx", "tree.tsx").draggable(true)),
            )
            .child(TreeNode::new("main.ts", "main.ts").draggable(true)),
        TreeNode::branch("docs", "docs")
            .draggable(true)
            .open_icon(IconName::FolderOpen)
            .child(
                TreeNode::new("readme.md", "readme.md")
                    .draggable(true)
                    .on_click(move |node, _window, cx| {
                        let label = node.label.clone();
                        story.update(cx, |this, cx| {
                            this.last_click = Some(label.clone());
                            cx.notify();
                        });
                    }),
            ),
        TreeNode::new("package.json", "package.json").draggable(true),
        TreeNode::new("pnpm-lock.yaml", "pnpm-lock.yaml").disabled(true),
    ]
}

fn outline_nodes() -> Vec<TreeNode> {
    vec![
        TreeNode::branch("guide", "Guide")
            .open_icon(IconName::FolderOpen)
            .child(TreeNode::new("install", "Installation"))
            .child(TreeNode::new("quickstart", "Quick Start")),
        TreeNode::branch("reference", "Reference")
            .open_icon(IconName::FolderOpen)
            .child(TreeNode::new("tree-view", "TreeView"))
            .child(TreeNode::new("button", "Button"))
            .child(TreeNode::new("page-content", "PageContent")),
    ]
}

fn format_tree(nodes: &[TreeNode]) -> String {
    fn walk(nodes: &[TreeNode], depth: usize, out: &mut String) {
        for node in nodes {
            out.push_str(&"  ".repeat(depth));
            out.push_str(node.id.as_ref());
            out.push('\n');
            if let Some(children) = node.children.as_deref() {
                walk(children, depth + 1, out);
            }
        }
    }

    let mut out = String::new();
    walk(nodes, 0, &mut out);
    out
}
