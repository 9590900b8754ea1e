//! Dashboard Page
//!
//! Record counts for every page the current role can open.

use gpui::{
    Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::i18n::t;
use crate::services::Catalog;
use crate::theme::colors::AdminColors;

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    catalog: Catalog,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, catalog: Catalog, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities, catalog }
    }

    /// Number of records behind a page; `None` for pages without records
    pub fn count(catalog: &Catalog, page: ActivePage) -> Option<usize> {
        match page {
            ActivePage::Dashboard => None,
            ActivePage::Streams => Some(catalog.streams.len()),
            ActivePage::Subjects => Some(catalog.subjects.len()),
            ActivePage::Students => Some(catalog.students.len()),
            ActivePage::Exams => Some(catalog.exams.len()),
        }
    }
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let navigation = self.entities.navigation.read(cx);
        let role = navigation.layout().role();
        let records_label = t(locale, "dashboard-records");

        let cards = navigation.layout().pages().iter().filter_map(|page| {
            let count = Self::count(&self.catalog, *page)?;
            Some(
                div()
                    .w(px(200.0))
                    .p_4()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .bg(AdminColors::content_bg())
                    .border_1()
                    .border_color(AdminColors::border())
                    .rounded_md()
                    .child(
                        div()
                            .text_sm()
                            .text_color(AdminColors::text_secondary())
                            .child(format!("{} {}", page.icon(), t(locale, page.title_key()))),
                    )
                    .child(
                        div()
                            .flex()
                            .items_end()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(28.0))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(AdminColors::text_primary())
                                    .child(count.to_string()),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(AdminColors::text_muted())
                                    .child(records_label.clone()),
                            ),
                    ),
            )
        });

        div()
            .size_full()
            .p_6()
            .flex()
            .flex_col()
            .gap_6()
            .bg(AdminColors::background())
            .child(
                div()
                    .text_size(px(20.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(AdminColors::text_primary())
                    .child(format!(
                        "{}, {}",
                        t(locale, "dashboard-welcome"),
                        t(locale, role.label_key())
                    )),
            )
            .child(div().flex().flex_wrap().gap_4().children(cards))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn counts_follow_the_catalog() {
        let catalog = Catalog::seeded(Duration::ZERO);
        assert_eq!(DashboardPage::count(&catalog, ActivePage::Dashboard), None);
        assert_eq!(DashboardPage::count(&catalog, ActivePage::Streams), Some(4));
        assert_eq!(DashboardPage::count(&catalog, ActivePage::Exams), Some(32));
    }
}
