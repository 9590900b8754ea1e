//! Pagination Component
//!
//! Page window computation and the page navigation footer of the DataTable.

use std::rc::Rc;

use gpui::{
    AnyElement, App, ClickEvent, ElementId, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window, div, prelude::*, px,
};

use crate::theme::colors::AdminColors;

/// Handler invoked with the requested page number
pub type PageChangeHandler = Rc<dyn Fn(&usize, &mut Window, &mut App) + 'static>;

/// Page position supplied by the table owner.
///
/// `page` is not checked against the page count; the owner clamps it. A
/// zero `page` or `limit` built by hand reads as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

/// One slot of the page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    /// Skipped pages; rendered as a marker, never a control
    Ellipsis,
}

impl PageState {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.limit.max(1)).max(1)
    }

    /// Nothing to page through when everything fits on one page
    pub fn needs_footer(&self) -> bool {
        self.total > self.limit.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.max(1).saturating_mul(self.limit.max(1)) < self.total
    }

    /// 1-based inclusive range of rows on the current page
    pub fn range(&self) -> (usize, usize) {
        let limit = self.limit.max(1);
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(limit)
            .saturating_add(1)
            .min(self.total);
        let end = self.page.max(1).saturating_mul(limit).min(self.total);
        (start, end)
    }

    /// First page, last page and the neighbours of the current page, with an
    /// ellipsis wherever numbers are skipped
    pub fn page_window(&self) -> Vec<PageItem> {
        let last = self.total_pages();
        let current = self.page.clamp(1, last);

        let mut pages: Vec<usize> = [1, current.saturating_sub(1), current, current + 1, last]
            .into_iter()
            .filter(|p| (1..=last).contains(p))
            .collect();
        pages.sort_unstable();
        pages.dedup();

        let mut items = Vec::with_capacity(pages.len() * 2);
        let mut previous: Option<usize> = None;
        for page in pages {
            if previous.is_some_and(|prev| page - prev > 1) {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(page));
            previous = Some(page);
        }
        items
    }
}

/// Pagination footer
#[derive(IntoElement)]
pub struct Pagination {
    state: PageState,
    of_label: SharedString,
    on_page_change: Option<PageChangeHandler>,
}

impl Pagination {
    /// Create a new pagination footer
    pub fn new(state: PageState) -> Self {
        Self {
            state,
            of_label: "of".into(),
            on_page_change: None,
        }
    }

    /// Set the word between the range and the total ("1-10 of 45")
    pub fn of_label(mut self, label: impl Into<SharedString>) -> Self {
        self.of_label = label.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(&usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn render_control(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        target: Option<usize>,
        active: bool,
        handler: Option<PageChangeHandler>,
    ) -> AnyElement {
        let mut control = div()
            .id(id)
            .min_w(px(28.0))
            .px_2()
            .py_1()
            .flex()
            .justify_center()
            .rounded_sm()
            .text_sm()
            .child(label.into());

        if active {
            control = control
                .bg(AdminColors::accent_blue())
                .text_color(AdminColors::text_light());
        } else if let Some(page) = target {
            control = control
                .text_color(AdminColors::text_primary())
                .cursor_pointer()
                .hover(|s| s.bg(AdminColors::table_row_hover()));

            if let Some(handler) = handler {
                control = control.on_click(move |_event: &ClickEvent, window, cx| {
                    handler(&page, window, cx);
                });
            }
        } else {
            control = control.text_color(AdminColors::text_muted());
        }

        control.into_any_element()
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let state = self.state;
        let (start, end) = state.range();
        let handler = self.on_page_change;

        let previous = state.has_previous().then(|| state.page - 1);
        let next = state.has_next().then(|| state.page + 1);

        let page_controls = state.page_window().into_iter().enumerate().map(|(ix, item)| {
            match item {
                PageItem::Page(page) => Self::render_control(
                    ("page", page),
                    page.to_string(),
                    (page != state.page).then_some(page),
                    page == state.page,
                    handler.clone(),
                ),
                PageItem::Ellipsis => div()
                    .id(("page-gap", ix))
                    .px_1()
                    .text_sm()
                    .text_color(AdminColors::text_muted())
                    .child("…")
                    .into_any_element(),
            }
        });

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(AdminColors::border())
            // Range summary
            .child(
                div()
                    .text_sm()
                    .text_color(AdminColors::text_secondary())
                    .child(format!("{start}–{end} {} {}", self.of_label, state.total)),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(Self::render_control("page-prev", "←", previous, false, handler.clone()))
                    .children(page_controls)
                    .child(Self::render_control("page-next", "→", next, false, handler.clone())),
            )
    }
}
