use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::menu::AppMenuBar;
use gpui_component::sidebar::{Sidebar, SidebarGroup, SidebarHeader, SidebarMenu, SidebarMenuItem};
use gpui_component::{Icon, IconName, Selectable as _, v_flex};

use gpui_arbor_components::PageContent;

use crate::buttons::ButtonStory;
use crate::content::ContentStory;
use crate::flat_tree::FlatTreeStory;
use crate::tree::TreeStory;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StoryId {
    Introduction,
    Tree,
    FlatTree,
    Buttons,
    PageContent,
}

impl StoryId {
    fn title(self) -> &'static str {
        match self {
            StoryId::Introduction => "Introduction",
            StoryId::Tree => "Tree View",
            StoryId::FlatTree => "Flat Records → Tree",
            StoryId::Buttons => "Button",
            StoryId::PageContent => "Page Content",
        }
    }
}

pub struct StoryGallery {
    _app_menu_bar: Entity<AppMenuBar>,
    selected: StoryId,
    tree: Option<Entity<TreeStory>>,
    flat_tree: Option<Entity<FlatTreeStory>>,
    buttons: Option<Entity<ButtonStory>>,
    content: Option<Entity<ContentStory>>,
}

impl StoryGallery {
    pub fn view(
        app_menu_bar: Entity<AppMenuBar>,
        _window: &mut Window,
        cx: &mut App,
    ) -> Entity<Self> {
        cx.new(|_| Self {
            _app_menu_bar: app_menu_bar,
            selected: StoryId::Introduction,
            tree: None,
            flat_tree: None,
            buttons: None,
            content: None,
        })
    }

    fn select_story(&mut self, next: StoryId, cx: &mut Context<Self>) {
        if self.selected == next {
            return;
        }
        self.selected = next;
        cx.notify();
    }

    fn ensure_tree(&mut self, window: &mut Window, cx: &mut Context<Self>) -> Entity<TreeStory> {
        if let Some(view) = &self.tree {
            return view.clone();
        }
        let view = TreeStory::view(window, cx);
        self.tree = Some(view.clone());
        view
    }

    fn ensure_flat_tree(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<FlatTreeStory> {
        if let Some(view) = &self.flat_tree {
            return view.clone();
        }
        let view = FlatTreeStory::view(window, cx);
        self.flat_tree = Some(view.clone());
        view
    }

    fn ensure_buttons(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<ButtonStory> {
        if let Some(view) = &self.buttons {
            return view.clone();
        }
        let view = ButtonStory::view(window, cx);
        self.buttons = Some(view.clone());
        view
    }

    fn ensure_content(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Entity<ContentStory> {
        if let Some(view) = &self.content {
            return view.clone();
        }
        let view = ContentStory::view(window, cx);
        self.content = Some(view.clone());
        view
    }

    fn render_introduction(&self, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme();

        v_flex()
            .size_full()
            .p(px(24.))
            .gap_y_3()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .child("Arbor Components"),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.muted_foreground)
                    .child("A small component library: a hierarchical tree view with selection and drag-and-drop, a button wrapper, and a page-content block."),
            )
            .child(
                PageContent::new()
                    .title("Getting around")
                    .paragraphs([
                        "Pick a story on the left, preview and interact on the right.",
                        "The Tree View story is the interesting one: try dragging files between folders.",
                    ]),
            )
            .into_any_element()
    }

    fn sidebar(&self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let gallery = cx.entity();
        let selected = self.selected;

        let item = |id: StoryId, label: &'static str, icon: IconName| {
            SidebarMenuItem::new(label)
                .icon(Icon::new(icon).size_4())
                .active(selected == id)
                .on_click({
                    let gallery = gallery.clone();
                    move |_, _window, cx| {
                        gallery.update(cx, |this, cx| this.select_story(id, cx));
                    }
                })
        };

        let tree_menu = SidebarMenuItem::new("Tree")
            .icon(Icon::new(IconName::LayoutDashboard).size_4())
            .default_open(true)
            .children([
                item(StoryId::Tree, "Tree View", IconName::Folder),
                item(StoryId::FlatTree, "Flat Records", IconName::List),
            ]);

        let stories_menu = SidebarMenu::new().children([
            tree_menu,
            item(StoryId::Buttons, "Button", IconName::Palette),
            item(StoryId::PageContent, "Page Content", IconName::ALargeSmall),
        ]);

        let getting_started_menu =
            SidebarMenu::new().child(item(StoryId::Introduction, "Introduction", IconName::Info));

        let header = SidebarHeader::new()
            .child(Icon::new(IconName::GalleryVerticalEnd).size_4())
            .child(div().font_weight(FontWeight::MEDIUM).child("Arbor"))
            .selected(selected == StoryId::Introduction);

        Sidebar::left()
            .header(header)
            .children([
                SidebarGroup::new("Getting Started").child(getting_started_menu),
                SidebarGroup::new("Stories").child(stories_menu),
            ])
            .render(window, cx)
    }
}

impl Render for StoryGallery {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content: AnyElement = match self.selected {
            StoryId::Introduction => self.render_introduction(cx),
            StoryId::Tree => self.ensure_tree(window, cx).into_any_element(),
            StoryId::FlatTree => self.ensure_flat_tree(window, cx).into_any_element(),
            StoryId::Buttons => self.ensure_buttons(window, cx).into_any_element(),
            StoryId::PageContent => self.ensure_content(window, cx).into_any_element(),
        };

        v_flex().size_full().child(
            gpui_component::h_flex()
                .size_full()
                .items_start()
                .child(self.sidebar(window, cx))
                .child(
                    v_flex()
                        .flex_1()
                        .h_full()
                        .min_w(px(0.))
                        .min_h(px(0.))
                        .bg(cx.theme().background)
                        .child(
                            v_flex()
                                .size_full()
                                .child(
                                    div()
                                        .w_full()
                                        .border_b_1()
                                        .border_color(cx.theme().border)
                                        .bg(cx.theme().background)
                                        .px(px(16.))
                                        .py(px(12.))
                                        .child(
                                            div()
                                                .text_sm()
                                                .font_weight(FontWeight::MEDIUM)
                                                .child(self.selected.title()),
                                        ),
                                )
                                .child(div().flex_1().min_h(px(0.)).child(content)),
                        ),
                ),
        )
    }
}
