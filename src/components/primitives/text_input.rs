//! TextInput Component
//!
//! A single-line text field. The field is stateless: the owner keeps the
//! value and applies [`EditKey`]s from the key handler.

use gpui::{
    App, ElementId, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent, Keystroke,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::theme::colors::AdminColors;

/// Edit produced by a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKey {
    Insert(String),
    Backspace,
    Clear,
}

impl EditKey {
    /// Map a keystroke to an edit; shortcuts and navigation keys map to nothing
    pub fn from_keystroke(keystroke: &Keystroke) -> Option<Self> {
        let modifiers = &keystroke.modifiers;
        match keystroke.key.as_str() {
            "backspace" => Some(EditKey::Backspace),
            "escape" => Some(EditKey::Clear),
            _ if modifiers.control || modifiers.platform || modifiers.function => None,
            _ => keystroke
                .key_char
                .clone()
                .filter(|text| !text.is_empty() && !text.chars().any(char::is_control))
                .map(EditKey::Insert),
        }
    }

    /// New value after the edit, or `None` if nothing changes
    pub fn apply(&self, value: &str) -> Option<String> {
        match self {
            EditKey::Insert(text) => Some(format!("{value}{text}")),
            EditKey::Backspace => {
                let mut chars = value.chars();
                chars.next_back()?;
                Some(chars.as_str().to_string())
            }
            EditKey::Clear if value.is_empty() => None,
            EditKey::Clear => Some(String::new()),
        }
    }
}

type KeyHandler = Box<dyn Fn(&KeyDownEvent, &mut Window, &mut App) + 'static>;

/// A text input element
#[derive(IntoElement)]
pub struct TextInput {
    id: ElementId,
    value: SharedString,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    on_key_down: Option<KeyHandler>,
}

impl TextInput {
    /// Create a new text input bound to a focus handle owned by the caller
    pub fn new(id: impl Into<ElementId>, focus_handle: &FocusHandle) -> Self {
        Self {
            id: id.into(),
            value: SharedString::default(),
            placeholder: SharedString::default(),
            focus_handle: focus_handle.clone(),
            on_key_down: None,
        }
    }

    /// Set the value
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the key handler
    pub fn on_key_down(
        mut self,
        handler: impl Fn(&KeyDownEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_key_down = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for TextInput {
    fn render(self, window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            AdminColors::border_focus()
        } else {
            AdminColors::input_border()
        };

        let (display_text, text_color) = if self.value.is_empty() && !is_focused {
            (self.placeholder.clone(), AdminColors::input_placeholder())
        } else if is_focused {
            (
                SharedString::from(format!("{}|", self.value)),
                AdminColors::text_primary(),
            )
        } else {
            (self.value.clone(), AdminColors::text_primary())
        };

        let focus_handle = self.focus_handle.clone();
        let mut input = div()
            .id(self.id)
            .track_focus(&self.focus_handle)
            .w_full()
            .px_2()
            .py_1()
            .bg(AdminColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded_sm()
            .text_color(text_color)
            .text_size(px(12.0))
            .overflow_hidden()
            .cursor_text()
            .on_click(move |_event, window, _cx| {
                window.focus(&focus_handle);
            })
            .child(display_text);

        if let Some(handler) = self.on_key_down {
            input = input.on_key_down(move |event, window, cx| handler(event, window, cx));
        }

        input
    }
}
