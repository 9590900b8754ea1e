//! Header Component
//!
//! The application header with title, role badge and language switcher.

use gpui::{
    Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window, div, px, rgba,
};

use crate::app::entities::AppEntities;
use crate::components::primitives::button::Button;
use crate::constants::HEADER_HEIGHT;
use crate::i18n::t;
use crate::theme::colors::AdminColors;
use crate::utils::config_store;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let role = self.entities.navigation.read(cx).layout().role();
        let title = t(locale, "app-title");

        let entities = self.entities.clone();

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(AdminColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(32.0))
                            .rounded_md()
                            .bg(rgba(0xffffffcc))
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(AdminColors::header_bg())
                            .font_weight(FontWeight::BOLD)
                            .child("E"),
                    )
                    .child(
                        div()
                            .text_color(AdminColors::text_header())
                            .text_size(px(18.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(title),
                    ),
            )
            // Right side: role badge and language switcher
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .px_2()
                            .py_1()
                            .rounded_md()
                            .border_1()
                            .border_color(rgba(0xffffff66))
                            .text_color(AdminColors::text_header())
                            .text_size(px(12.0))
                            .child(t(locale, role.label_key())),
                    )
                    .child(
                        Button::ghost("lang-switcher", locale.display_name()).on_click(
                            move |_event, _window, cx| {
                                let locale = entities.i18n.update(cx, |i18n, cx| {
                                    i18n.toggle_locale();
                                    cx.notify();
                                    i18n.locale
                                });
                                let config = entities.config.update(cx, |state, _cx| {
                                    state.set_locale(locale.code());
                                    state.config.clone()
                                });
                                if let Err(e) = config_store::save_config(&config) {
                                    tracing::warn!(error = %e, "Failed to persist language");
                                }
                            },
                        ),
                    ),
            )
    }
}
