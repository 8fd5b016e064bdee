use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::{IconName, h_flex, v_flex};

use gpui_arbor_tree::{FlatRecord, TreeViewState, tree_from_flat, tree_view};

/// Note the last record: its parent is never defined, so the materializer
/// roots it instead of erroring.
const FLAT_RECORDS_JSON: &str = r#"[
  { "id": "workspace", "type": "folder" },
  { "id": "crates", "parentId": "workspace", "type": "folder" },
  { "id": "tree", "parentId": "crates", "type": "folder" },
  { "id": "tree-lib", "parentId": "tree", "label": "lib.rs", "type": "file" },
  { "id": "story", "parentId": "crates", "type": "folder" },
  { "id": "story-main", "parentId": "story", "label": "main.rs", "type": "file" },
  { "id": "readme", "parentId": "workspace", "label": "README.md", "type": "file" },
  { "id": "orphan", "parentId": "missing", "label": "orphan.txt", "type": "file" }
]"#;

pub struct FlatTreeStory {
    tree: Entity<TreeViewState>,
}

impl FlatTreeStory {
    pub fn view(_window: &mut Window, cx: &mut App) -> Entity<Self> {
        let records: Vec<FlatRecord> =
            serde_json::from_str(FLAT_RECORDS_JSON).unwrap_or_default();
        let nodes = tree_from_flat(records);

        let tree = cx.new(|cx| {
            TreeViewState::new(cx)
                .nodes(nodes)
                .expand_all(true)
                .default_branch_icon(IconName::Folder)
                .default_leaf_icon(IconName::File)
        });
        cx.new(|_| Self { tree })
    }
}

impl Render for FlatTreeStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

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
                            .child("Flat Records → Tree"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child("A flat, parent-referencing record list materialized into the nested tree. Folders stay expandable even when empty; records whose parent is unknown become roots."),
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
                            .flex_1()
                            .min_w(px(0.))
                            .h_full()
                            .gap_y_2()
                            .child(div().text_sm().font_weight(FontWeight::MEDIUM).child("Input"))
                            .child(
                                v_flex()
                                    .flex_1()
                                    .min_h(px(0.))
                                    .rounded(px(12.))
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.background)
                                    .p(px(12.))
                                    .gap_y_0p5()
                                    .children(
                                        FLAT_RECORDS_JSON
                                            .lines()
                                            .map(|line| div().text_sm().child(line.to_string())),
                                    ),
                            ),
                    )
                    .child(
                        v_flex()
                            .w(px(360.))
                            .min_w(px(0.))
                            .h_full()
                            .gap_y_2()
                            .child(div().text_sm().font_weight(FontWeight::MEDIUM).child("Tree"))
                            .child(
                                div()
                                    .flex_1()
                                    .min_h(px(0.))
                                    .rounded(px(12.))
                                    .border_1()
                                    .border_color(theme.border)
                                    .bg(theme.background)
                                    .child(tree_view(&self.tree)),
                            ),
                    ),
            )
    }
}
