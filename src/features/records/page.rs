//! Records Page
//!
//! Lists one record type in a data table. The page owns the query state:
//! table events change it, and every change triggers a fetch whose result is
//! pushed back into the table.

use std::time::Duration;

use gpui::{
    AppContext, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement, Render,
    Styled, Subscription, Window, div, px,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::data_table::{
    DataTable, DataTableEvent, TableLabels,
};
use crate::components::primitives::button::Button;
use crate::error::Result;
use crate::features::records::columns::RecordColumns;
use crate::features::records::controller::RecordsController;
use crate::i18n::{Locale, t};
use crate::services::{Catalog, PageSlice};
use crate::state::table_state::{RequestOutcome, TableQueryState};
use crate::theme::colors::AdminColors;

/// Records page component
pub struct RecordsPage<R: RecordColumns> {
    entities: AppEntities,
    controller: RecordsController<R>,
    query: TableQueryState<R>,
    table: Entity<DataTable<R>>,
    _subscriptions: Vec<Subscription>,
}

fn table_labels(locale: Locale) -> TableLabels {
    TableLabels {
        loading: t(locale, "table-loading"),
        empty: t(locale, "table-no-data"),
        filter_placeholder: t(locale, "table-filter-placeholder"),
        of: t(locale, "table-of"),
    }
}

impl<R: RecordColumns> RecordsPage<R> {
    pub fn new(entities: AppEntities, catalog: &Catalog, cx: &mut Context<Self>) -> Self {
        let locale = entities.i18n.read(cx).locale;
        let config = entities.config.read(cx).config.clone();

        let table = cx.new(|cx| {
            let mut table = DataTable::<R>::new(cx);
            table.set_columns(R::columns(locale), cx);
            table.set_labels(table_labels(locale));
            table.set_debounce(Duration::from_millis(config.filter_debounce_ms));
            table
        });

        let subscriptions = vec![
            cx.subscribe(&table, |this, _table, event: &DataTableEvent, cx| {
                this.handle_table_event(event, cx);
            }),
            // Relabel columns on language change
            cx.observe(&entities.i18n, |this, i18n, cx| {
                let locale = i18n.read(cx).locale;
                this.table.update(cx, |table, cx| {
                    table.set_columns(R::columns(locale), cx);
                    table.set_labels(table_labels(locale));
                    cx.notify();
                });
                cx.notify();
            }),
        ];

        let mut page = Self {
            entities,
            controller: RecordsController::new(catalog),
            query: TableQueryState::new(config.page_size),
            table,
            _subscriptions: subscriptions,
        };
        page.reload(cx);
        page
    }

    fn handle_table_event(&mut self, event: &DataTableEvent, cx: &mut Context<Self>) {
        let changed = match event {
            DataTableEvent::PageChanged(page) => self.query.set_page(*page),
            DataTableEvent::SortChanged(sort) => self.query.set_sort(sort.clone()),
            DataTableEvent::FilterChanged { field, value } => self.query.set_filter(field, value),
        };

        if changed {
            self.reload(cx);
        } else {
            // Keep the table showing the owner's state, e.g. after a refused page
            self.sync_table(cx);
        }
    }

    /// Fetch the current page; responses of earlier fetches are discarded
    pub fn reload(&mut self, cx: &mut Context<Self>) {
        let (seq, query) = self.query.begin_request();
        self.sync_table(cx);

        let store = self.controller.store();
        cx.spawn(async move |this, cx| {
            let result = RecordsController::fetch(store, seq, query).await;
            this.update(cx, |page, cx| page.apply_response(seq, result, cx))
                .ok();
        })
        .detach();
    }

    fn apply_response(&mut self, seq: u64, result: Result<PageSlice<R>>, cx: &mut Context<Self>) {
        match self.query.finish_request(seq, result) {
            RequestOutcome::Stale => {}
            RequestOutcome::Reload => self.reload(cx),
            RequestOutcome::Applied => {
                self.sync_table(cx);
                cx.notify();
            }
        }
    }

    /// Push the query state into the table
    fn sync_table(&self, cx: &mut Context<Self>) {
        let query = &self.query;
        self.table.update(cx, |table, cx| {
            table.set_rows(query.rows.clone());
            table.set_loading(query.loading);
            table.set_error(query.error.clone());
            table.set_pagination(Some(query.page_state()));
            table.set_sorting(Some(query.sort.clone()));
            table.set_filters(Some(&query.filters));
            cx.notify();
        });
    }
}

impl<R: RecordColumns> Render for RecordsPage<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let total = self.query.total;

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            // Title bar
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_2()
                            .child(
                                div()
                                    .text_size(px(20.0))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(AdminColors::text_primary())
                                    .child(t(locale, R::PAGE.title_key())),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .text_color(AdminColors::text_secondary())
                                    .child(format!("({total})")),
                            ),
                    )
                    .child(
                        Button::primary("records-refresh", t(locale, "action-refresh"))
                            .disabled(self.query.loading)
                            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                                this.reload(cx);
                            })),
                    ),
            )
            // Table
            .child(div().flex_1().overflow_hidden().child(self.table.clone()))
    }
}
