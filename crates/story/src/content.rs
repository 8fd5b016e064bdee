use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::v_flex;

use gpui_arbor_components::PageContent;

pub struct ContentStory;

impl ContentStory {
    pub fn view(_window: &mut Window, cx: &mut App) -> Entity<Self> {
        cx.new(|_| Self)
    }
}

impl Render for ContentStory {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .size_full()
            .p(px(16.))
            .gap_y_4()
            .child(
                v_flex()
                    .gap_y_1()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::BOLD)
                            .child("Page Content"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.muted_foreground)
                            .child("A titled block whose body is one paragraph or a sequence of paragraphs."),
                    ),
            )
            .child(
                PageContent::new()
                    .title("Single paragraph")
                    .paragraph("The body can be a single string, rendered as one paragraph."),
            )
            .child(
                PageContent::new()
                    .title("Paragraph sequence")
                    .paragraphs([
                        "When the body is a sequence, every entry becomes its own paragraph.",
                        "Order is preserved, and there is no limit on the number of entries.",
                        "Styling follows the surrounding theme; callers can refine it further.",
                    ]),
            )
    }
}
