use std::rc::Rc;

use gpui::{
    App, ClickEvent, ElementId, IntoElement, RenderOnce, SharedString, StyleRefinement, Styled,
    Window, prelude::FluentBuilder as _,
};
use gpui_component::button::{Button, ButtonVariants as _};
use gpui_component::{Disableable, Icon, Sizable as _, StyledExt as _};

/// Visual variant of an [`ArborButton`], mapped onto the underlying
/// `gpui-component` button variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArborButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArborButtonSize {
    Small,
    #[default]
    Medium,
}

/// Prop-mapping wrapper over [`gpui_component::button::Button`].
///
/// Carries no behavior of its own; every prop forwards to the underlying
/// button.
#[derive(IntoElement)]
pub struct ArborButton {
    id: ElementId,
    label: Option<SharedString>,
    icon: Option<Icon>,
    variant: ArborButtonVariant,
    size: ArborButtonSize,
    disabled: bool,
    style: StyleRefinement,
    on_click: Option<Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>>,
}

impl ArborButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            icon: None,
            variant: ArborButtonVariant::default(),
            size: ArborButtonSize::default(),
            disabled: false,
            style: StyleRefinement::default(),
            on_click: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: ArborButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ArborButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }
}

impl Disableable for ArborButton {
    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Styled for ArborButton {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for ArborButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let button = Button::new(self.id);

        let button = match self.variant {
            ArborButtonVariant::Primary => button.primary(),
            ArborButtonVariant::Outline => button.outline(),
            ArborButtonVariant::Ghost => button.ghost(),
            ArborButtonVariant::Danger => button.danger(),
        };
        let button = match self.size {
            ArborButtonSize::Small => button.small(),
            ArborButtonSize::Medium => button,
        };

        button
            .when_some(self.label, |this, label| this.label(label))
            .when_some(self.icon, |this, icon| this.icon(icon))
            .disabled(self.disabled)
            .when_some(self.on_click, |this, on_click| {
                this.on_click(move |event, window, cx| (on_click)(event, window, cx))
            })
            .refine_style(&self.style)
    }
}
