//! Sidebar Component
//!
//! Navigation sidebar listing the pages of the current role.

use gpui::{
    ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window, div, px, rgba,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::constants::SIDEBAR_WIDTH;
use crate::i18n::{Locale, t};
use crate::theme::colors::AdminColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        // Observe navigation changes
        cx.observe(&entities.navigation, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(
        &self,
        page: ActivePage,
        locale: Locale,
        active_page: ActivePage,
    ) -> impl IntoElement {
        let is_active = page == active_page;
        let entities = self.entities.clone();

        let (bg_color, text_color, border_color) = if is_active {
            (
                AdminColors::nav_active_bg(),
                AdminColors::header_bg(),
                AdminColors::header_bg(),
            )
        } else {
            (rgba(0x00000000), AdminColors::text_secondary(), rgba(0x00000000))
        };

        div()
            .id(SharedString::from(format!("nav-{page:?}")))
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .gap_2()
            .bg(bg_color)
            .border_l_2()
            .border_color(border_color)
            .text_color(text_color)
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(AdminColors::nav_hover_bg()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                entities.navigation.update(cx, |navigation, cx| {
                    if navigation.set_active_page(page) {
                        cx.notify();
                    }
                });
            })
            .child(div().w(px(16.0)).child(page.icon()))
            .child(t(locale, page.title_key()))
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let navigation = self.entities.navigation.read(cx);
        let active_page = navigation.active_page;

        div()
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .bg(AdminColors::sidebar_bg())
            .border_r_1()
            .border_color(AdminColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .children(
                navigation
                    .layout()
                    .pages()
                    .iter()
                    .map(|page| self.render_nav_item(*page, locale, active_page)),
            )
    }
}
