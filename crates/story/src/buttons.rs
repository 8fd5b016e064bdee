use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::{Disableable as _, Icon, IconName, h_flex, v_flex};

use gpui_arbor_components::{ArborButton, ArborButtonSize, ArborButtonVariant};

pub struct ButtonStory {
    clicks: usize,
}

impl ButtonStory {
    pub fn view(_window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|_| Self { clicks: 0 })
    }
}

impl Render for ButtonStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let story = cx.entity();

        let counting = |id: &'static str| {
            let story = story.clone();
            ArborButton::new(id).on_click(move |_, _window, cx| {
                story.update(cx, |this, cx| {
                    this.clicks += 1;
                    cx.notify();
                });
            })
        };

        v_flex()
            .size_full()
            .p(px(16.))
            .gap_y_3()
            .child(
                v_flex()
                    .gap_y_1()
                    .child(div().text_xl().font_weight(FontWeight::BOLD).child("Button"))
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child(format!("A thin wrapper over the base button. Clicked {} times.", self.clicks)),
                    ),
            )
            .child(
                h_flex()
                    .gap_x_2()
                    .child(counting("primary").label("Primary"))
                    .child(
                        counting("outline")
                            .label("Outline")
                            .variant(ArborButtonVariant::Outline),
                    )
                    .child(
                        counting("ghost")
                            .label("Ghost")
                            .variant(ArborButtonVariant::Ghost),
                    )
                    .child(
                        counting("danger")
                            .label("Danger")
                            .variant(ArborButtonVariant::Danger),
                    ),
            )
            .child(
                h_flex()
                    .gap_x_2()
                    .child(
                        counting("small")
                            .label("Small")
                            .size(ArborButtonSize::Small),
                    )
                    .child(
                        counting("small-icon")
                            .label("New File")
                            .icon(Icon::new(IconName::Plus))
                            .size(ArborButtonSize::Small)
                            .variant(ArborButtonVariant::Outline),
                    )
                    .child(
                        ArborButton::new("disabled")
                            .label("Disabled")
                            .disabled(true),
                    ),
            )
    }
}
