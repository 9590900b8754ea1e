//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, px, rgba,
};

use crate::theme::colors::AdminColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled accent button
    #[default]
    Primary,
    /// Transparent button for dark or busy backgrounds
    Ghost,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            disabled: false,
            on_click: None,
        }
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match self.variant {
            ButtonVariant::Primary => (
                AdminColors::button_primary_bg(),
                AdminColors::button_primary_text(),
                AdminColors::button_primary_hover(),
            ),
            ButtonVariant::Ghost => (
                rgba(0xffffff22),
                AdminColors::text_header(),
                rgba(0xffffff44),
            ),
        };

        let mut element = div()
            .id(self.id)
            .px(px(12.0))
            .py(px(6.0))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(13.0))
            .rounded_md()
            .child(self.label);

        if self.disabled {
            element = element.opacity(0.5);
        } else {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
