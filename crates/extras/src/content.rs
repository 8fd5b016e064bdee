use gpui::{
    App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, StyleRefinement, Styled,
    Window, div, prelude::FluentBuilder as _,
};
use gpui_component::{ActiveTheme as _, StyledExt as _, v_flex};

/// Page-content block: an optional title followed by body text, where the
/// body is one paragraph or a sequence of paragraphs.
#[derive(IntoElement)]
pub struct PageContent {
    title: Option<SharedString>,
    paragraphs: Vec<SharedString>,
    style: StyleRefinement,
}

impl PageContent {
    pub fn new() -> Self {
        Self {
            title: None,
            paragraphs: Vec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn paragraph(mut self, paragraph: impl Into<SharedString>) -> Self {
        self.paragraphs.push(paragraph.into());
        self
    }

    pub fn paragraphs<I, T>(mut self, paragraphs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SharedString>,
    {
        self.paragraphs
            .extend(paragraphs.into_iter().map(Into::into));
        self
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled for PageContent {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for PageContent {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let muted = theme.muted_foreground;

        v_flex()
            .gap_y_2()
            .when_some(self.title, |this, title| {
                this.child(
                    div()
                        .text_lg()
                        .font_weight(FontWeight::SEMIBOLD)
                        .child(title),
                )
            })
            .children(
                self.paragraphs
                    .into_iter()
                    .map(|paragraph| div().text_sm().text_color(muted).child(paragraph)),
            )
            .refine_style(&self.style)
    }
}
