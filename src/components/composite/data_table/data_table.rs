//! DataTable Component
//!
//! Renders rows of any [`Record`] type with sortable headers, per-column
//! filter inputs and a pagination footer. The table never fetches, sorts or
//! filters rows itself: user intent leaves as [`DataTableEvent`]s and the
//! owner pushes the resulting rows back in.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use gpui::{
    AnyElement, ClickEvent, Context, Div, ElementId, EventEmitter, FocusHandle, IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, Styled, Task, Window, div, prelude::*, px,
};

use super::column::{CellContent, Column, ColumnWidth};
use super::filter::{DebounceTicket, FilterDrafts};
use super::pagination::{PageState, Pagination};
use super::row_key::RowKey;
use super::sort::{SortIndicator, SortState};
use crate::components::primitives::text_input::{EditKey, TextInput};
use crate::constants::{
    DEFAULT_COLUMN_WIDTH, FILTER_DEBOUNCE_MS, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT,
};
use crate::domain::record::Record;
use crate::theme::colors::AdminColors;

/// Events emitted to the table owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTableEvent {
    /// A page other than the current one was requested
    PageChanged(usize),
    /// The header of a sortable column was clicked; carries field and order
    SortChanged(SortState),
    /// A filter draft was committed after the debounce delay
    FilterChanged { field: String, value: String },
}

/// Which of the mutually exclusive body states is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Error(SharedString),
    Empty,
    Rows,
}

impl BodyState {
    /// Loading beats error, error beats the empty state
    pub fn resolve(loading: bool, error: Option<&SharedString>, row_count: usize) -> Self {
        if loading {
            BodyState::Loading
        } else if let Some(error) = error {
            BodyState::Error(error.clone())
        } else if row_count == 0 {
            BodyState::Empty
        } else {
            BodyState::Rows
        }
    }
}

/// Localized strings used by the table chrome
#[derive(Debug, Clone)]
pub struct TableLabels {
    pub loading: SharedString,
    pub empty: SharedString,
    pub filter_placeholder: SharedString,
    pub of: SharedString,
}

impl Default for TableLabels {
    fn default() -> Self {
        Self {
            loading: "Loading...".into(),
            empty: "No data".into(),
            filter_placeholder: "Search...".into(),
            of: "of".into(),
        }
    }
}

/// DataTable component
pub struct DataTable<R: Record> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    loading: bool,
    error: Option<SharedString>,
    labels: TableLabels,
    pagination: Option<PageState>,
    /// `None` disables sorting entirely
    sort: Option<SortState>,
    filtering: bool,
    drafts: FilterDrafts,
    debounce: Duration,
    /// At most one pending commit per column; dropping the task cancels it
    pending_commits: HashMap<SharedString, Task<()>>,
    filter_focus: HashMap<SharedString, FocusHandle>,
    row_height: f32,
    header_height: f32,
}

impl<R: Record> EventEmitter<DataTableEvent> for DataTable<R> {}

impl<R: Record> DataTable<R> {
    /// Create a new data table
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            loading: false,
            error: None,
            labels: TableLabels::default(),
            pagination: None,
            sort: None,
            filtering: false,
            drafts: FilterDrafts::new(),
            debounce: Duration::from_millis(FILTER_DEBOUNCE_MS),
            pending_commits: HashMap::new(),
            filter_focus: HashMap::new(),
            row_height: TABLE_ROW_HEIGHT,
            header_height: TABLE_HEADER_HEIGHT,
        }
    }

    /// Set the columns; pending filter commits of dropped columns are cancelled
    pub fn set_columns(&mut self, columns: Vec<Column<R>>, cx: &mut Context<Self>) {
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_ref()).collect();
        for field in self.drafts.retain_fields(&keys) {
            self.pending_commits.remove(field.as_str());
        }
        self.pending_commits.retain(|field, _| keys.contains(&field.as_ref()));
        self.filter_focus.retain(|field, _| keys.contains(&field.as_ref()));

        for column in columns.iter().filter(|c| c.filterable) {
            self.filter_focus
                .entry(column.key.clone())
                .or_insert_with(|| cx.focus_handle());
        }

        self.columns = columns;
        cx.notify();
    }

    /// Set the rows of the current page
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set or clear the error shown instead of the rows
    pub fn set_error(&mut self, error: Option<impl Into<SharedString>>) {
        self.error = error.map(Into::into);
    }

    /// Set the localized chrome strings
    pub fn set_labels(&mut self, labels: TableLabels) {
        self.labels = labels;
    }

    /// Set the page position; `None` hides the footer
    pub fn set_pagination(&mut self, pagination: Option<PageState>) {
        self.pagination = pagination;
    }

    /// Set the owner's sort state; `None` disables sorting
    pub fn set_sorting(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    /// Set the owner's committed filters; `None` hides the filter inputs
    pub fn set_filters(&mut self, filters: Option<&BTreeMap<String, String>>) {
        match filters {
            Some(filters) => {
                self.filtering = true;
                self.drafts.sync_committed(filters);
            }
            None => {
                self.filtering = false;
                self.drafts.cancel_all();
                self.pending_commits.clear();
            }
        }
    }

    /// Set the filter commit delay; zero commits on every keystroke
    pub fn set_debounce(&mut self, debounce: Duration) {
        self.debounce = debounce;
    }

    fn click_header(&mut self, field: &str, cx: &mut Context<Self>) {
        let Some(sort) = &self.sort else {
            return;
        };
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key.as_ref() == field && c.sortable);

        if let Some(next) = sort.click(field, sortable) {
            tracing::debug!(field, order = ?next.order, "Table sort requested");
            self.sort = Some(next.clone());
            cx.emit(DataTableEvent::SortChanged(next));
            cx.notify();
        }
    }

    fn request_page(&mut self, page: usize, cx: &mut Context<Self>) {
        let Some(state) = self.pagination else {
            return;
        };
        if page >= 1 && page != state.page {
            cx.emit(DataTableEvent::PageChanged(page));
        }
    }

    fn handle_filter_key(&mut self, field: &SharedString, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let Some(edit) = EditKey::from_keystroke(&event.keystroke) else {
            return;
        };
        let Some(text) = edit.apply(self.drafts.value(field)) else {
            return;
        };
        cx.stop_propagation();
        self.type_filter(field.clone(), text, cx);
    }

    /// Update the draft immediately and (re)schedule its commit
    pub fn type_filter(&mut self, field: SharedString, text: String, cx: &mut Context<Self>) {
        if self.debounce.is_zero() {
            let commit = self.drafts.commit_now(&field, text);
            self.pending_commits.remove(&field);
            cx.emit(DataTableEvent::FilterChanged {
                field: commit.field,
                value: commit.value,
            });
            cx.notify();
            return;
        }

        let ticket = self.drafts.keystroke(&field, text);
        let delay = self.debounce;
        let task = cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            this.update(cx, |table, cx| table.finish_debounce(&ticket, cx))
                .ok();
        });
        // Replacing the previous task cancels its timer.
        self.pending_commits.insert(field, task);
        cx.notify();
    }

    fn finish_debounce(&mut self, ticket: &DebounceTicket, cx: &mut Context<Self>) {
        if let Some(commit) = self.drafts.elapse(ticket) {
            tracing::debug!(field = %commit.field, value = %commit.value, "Table filter committed");
            cx.emit(DataTableEvent::FilterChanged {
                field: commit.field,
                value: commit.value,
            });
            cx.notify();
        }
    }

    /// Apply a column width to a cell
    fn sized(cell: Div, width: ColumnWidth) -> Div {
        match width {
            ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
            ColumnWidth::Flex { min, max } => {
                let cell = cell.flex_1().min_w(px(min.unwrap_or(DEFAULT_COLUMN_WIDTH)));
                match max {
                    Some(max) => cell.max_w(px(max)),
                    None => cell,
                }
            }
        }
    }

    /// Render the header row
    fn render_header(&self, cx: &Context<Self>) -> impl IntoElement {
        let mut cells: Vec<AnyElement> = Vec::with_capacity(self.columns.len());

        for column in &self.columns {
            let key = column.key.clone();

            let mut label = div()
                .id(ElementId::Name(format!("header-{key}").into()))
                .flex()
                .items_center()
                .gap_1()
                .text_sm()
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(AdminColors::text_primary())
                .child(column.label.clone());

            if let Some(sort) = self.sort.as_ref().filter(|_| column.sortable) {
                let indicator = sort.indicator(&key);
                let indicator_color = if indicator == SortIndicator::Neutral {
                    AdminColors::text_muted()
                } else {
                    AdminColors::accent_blue()
                };
                let field = key.clone();

                label = label
                    .cursor_pointer()
                    .hover(|s| s.text_color(AdminColors::accent_blue()))
                    .child(
                        div()
                            .text_xs()
                            .text_color(indicator_color)
                            .child(indicator.glyph()),
                    )
                    .on_click(cx.listener(move |this, _event: &ClickEvent, _window, cx| {
                        this.click_header(&field, cx);
                    }));
            }

            let mut cell = Self::sized(div().px_3().py_2().flex().flex_col().gap_1(), column.width)
                .child(label);

            if self.filtering && column.filterable {
                if let Some(focus_handle) = self.filter_focus.get(&key) {
                    let field = key.clone();
                    cell = cell.child(
                        TextInput::new(ElementId::Name(format!("filter-{key}").into()), focus_handle)
                            .value(self.drafts.value(&key).to_string())
                            .placeholder(self.labels.filter_placeholder.clone())
                            .on_key_down(cx.listener(
                                move |this, event: &KeyDownEvent, _window, cx| {
                                    this.handle_filter_key(&field, event, cx);
                                },
                            )),
                    );
                }
            }

            cells.push(cell.into_any_element());
        }

        div()
            .min_h(px(self.header_height))
            .w_full()
            .flex()
            .items_start()
            .bg(AdminColors::table_header_bg())
            .border_b_1()
            .border_color(AdminColors::border())
            .children(cells)
    }

    fn render_cell(content: CellContent) -> AnyElement {
        match content {
            CellContent::Blank => div().into_any_element(),
            CellContent::Text(text) => div()
                .text_color(AdminColors::text_primary())
                .child(text)
                .into_any_element(),
            CellContent::Badge { text, color } => div()
                .px_2()
                .rounded_sm()
                .border_1()
                .border_color(color)
                .text_xs()
                .text_color(color)
                .child(text)
                .into_any_element(),
        }
    }

    /// Render a data row
    fn render_row(&self, row: &R, index: usize) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            AdminColors::content_bg()
        } else {
            AdminColors::table_row_alt()
        };

        div()
            .id(RowKey::for_row(row, index).element_id())
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(AdminColors::table_row_hover()))
            .border_b_1()
            .border_color(AdminColors::border())
            .children(self.columns.iter().map(|column| {
                Self::sized(div().px_3().text_sm().overflow_hidden(), column.width)
                    .child(Self::render_cell(column.cell(row)))
            }))
    }

    /// Render a single centered message row
    fn render_message(&self, message: SharedString, color: gpui::Rgba) -> impl IntoElement {
        div()
            .w_full()
            .py_8()
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(color)
            .child(message)
    }
}

impl<R: Record> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let body = match BodyState::resolve(self.loading, self.error.as_ref(), self.rows.len()) {
            BodyState::Loading => self
                .render_message(self.labels.loading.clone(), AdminColors::text_muted())
                .into_any_element(),
            BodyState::Error(message) => self
                .render_message(message, AdminColors::danger())
                .into_any_element(),
            BodyState::Empty => self
                .render_message(self.labels.empty.clone(), AdminColors::text_muted())
                .into_any_element(),
            BodyState::Rows => div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    self.rows
                        .iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i)),
                )
                .into_any_element(),
        };

        let footer = self.pagination.filter(PageState::needs_footer).map(|state| {
            Pagination::new(state)
                .of_label(self.labels.of.clone())
                .on_page_change(cx.listener(|this, page: &usize, _window, cx| {
                    this.request_page(*page, cx);
                }))
        });

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(AdminColors::content_bg())
            .border_1()
            .border_color(AdminColors::border())
            .rounded_md()
            .overflow_hidden()
            .child(self.render_header(cx))
            .child(body)
            .children(footer)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gpui::{AppContext, Entity, Subscription, TestAppContext};

    use super::*;
    use crate::components::composite::data_table::sort::SortOrder;
    use crate::domain::record::FieldValue;

    #[derive(Debug, Clone)]
    struct Row {
        id: &'static str,
        name: &'static str,
    }

    impl Record for Row {
        const FIELDS: &'static [&'static str] = &["name", "note"];

        fn id(&self) -> Option<&str> {
            Some(self.id)
        }

        fn field(&self, key: &str) -> Option<FieldValue> {
            (key == "name").then(|| self.name.into())
        }
    }

    type Events = Rc<RefCell<Vec<DataTableEvent>>>;

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name").sortable().filterable(),
            Column::new("note", "Note").filterable(),
        ]
    }

    fn table_with_events(cx: &mut TestAppContext) -> (Entity<DataTable<Row>>, Events, Subscription) {
        let table = cx.new(|cx| {
            let mut table = DataTable::new(cx);
            table.set_columns(columns(), cx);
            table.set_rows(vec![Row { id: "r1", name: "Ann" }]);
            table.set_sorting(Some(SortState::default()));
            table.set_filters(Some(&BTreeMap::new()));
            table.set_pagination(Some(PageState::new(2, 10, 45)));
            table
        });

        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let subscription = cx.update(|cx| {
            cx.subscribe(&table, move |_, event: &DataTableEvent, _| {
                sink.borrow_mut().push(event.clone());
            })
        });
        (table, events, subscription)
    }

    fn filter_changed(field: &str, value: &str) -> DataTableEvent {
        DataTableEvent::FilterChanged {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    #[gpui::test]
    fn rapid_typing_emits_one_filter_change(cx: &mut TestAppContext) {
        let (table, events, _subscription) = table_with_events(cx);

        table.update(cx, |table, cx| table.type_filter("name".into(), "a".into(), cx));
        cx.executor().advance_clock(Duration::from_millis(100));
        table.update(cx, |table, cx| table.type_filter("name".into(), "ab".into(), cx));

        // The draft is echoed before anything is committed
        assert_eq!(cx.read(|cx| table.read(cx).drafts.value("name").to_string()), "ab");

        // Past the first keystroke's deadline, before the second's
        cx.executor().advance_clock(Duration::from_millis(450));
        assert!(events.borrow().is_empty());

        cx.executor().advance_clock(Duration::from_millis(100));
        assert_eq!(*events.borrow(), vec![filter_changed("name", "ab")]);

        cx.executor().advance_clock(Duration::from_secs(2));
        assert_eq!(events.borrow().len(), 1);
    }

    #[gpui::test]
    fn zero_debounce_commits_every_keystroke(cx: &mut TestAppContext) {
        let (table, events, _subscription) = table_with_events(cx);

        table.update(cx, |table, cx| {
            table.set_debounce(Duration::ZERO);
            table.type_filter("name".into(), "a".into(), cx);
            table.type_filter("name".into(), "ab".into(), cx);
        });
        cx.run_until_parked();

        assert_eq!(
            *events.borrow(),
            vec![filter_changed("name", "a"), filter_changed("name", "ab")]
        );
    }

    #[gpui::test]
    fn removing_a_column_cancels_its_pending_commit(cx: &mut TestAppContext) {
        let (table, events, _subscription) = table_with_events(cx);

        table.update(cx, |table, cx| {
            table.type_filter("note".into(), "late".into(), cx);
            table.type_filter("name".into(), "ann".into(), cx);
            table.set_columns(vec![Column::new("name", "Name").filterable()], cx);
        });
        cx.executor().advance_clock(Duration::from_millis(600));

        assert_eq!(*events.borrow(), vec![filter_changed("name", "ann")]);
    }

    #[gpui::test]
    fn dropping_the_table_cancels_pending_commits(cx: &mut TestAppContext) {
        let (table, events, _subscription) = table_with_events(cx);

        table.update(cx, |table, cx| table.type_filter("name".into(), "ann".into(), cx));
        let weak = table.downgrade();
        drop(table);
        cx.update(|_| {});
        assert!(weak.upgrade().is_none());

        cx.executor().advance_clock(Duration::from_millis(600));
        assert!(events.borrow().is_empty());
    }

    #[gpui::test]
    fn header_clicks_toggle_sortable_columns_only(cx: &mut TestAppContext) {
        let (table, events, _subscription) = table_with_events(cx);

        table.update(cx, |table, cx| {
            table.click_header("note", cx);
            table.click_header("missing", cx);
        });
        cx.run_until_parked();
        assert!(events.borrow().is_empty());

        table.update(cx, |table, cx| {
            table.click_header("name", cx);
            table.click_header("name", cx);
        });
        cx.run_until_parked();
        assert_eq!(
            *events.borrow(),
            vec![
                DataTableEvent::SortChanged(SortState::new("name", SortOrder::Ascending)),
                DataTableEvent::SortChanged(SortState::new("name", SortOrder::Descending)),
            ]
        );
    }

    #[gpui::test]
    fn header_clicks_are_ignored_when_sorting_is_disabled(cx: &mut TestAppContext) {
        let (table, events, _subscription) = table_with_events(cx);

        table.update(cx, |table, cx| {
            table.set_sorting(None);
            table.click_header("name", cx);
        });
        cx.run_until_parked();
        assert!(events.borrow().is_empty());
    }

    #[gpui::test]
    fn only_other_pages_are_requested(cx: &mut TestAppContext) {
        let (table, events, _subscription) = table_with_events(cx);

        table.update(cx, |table, cx| {
            table.request_page(2, cx);
            table.request_page(0, cx);
            table.request_page(3, cx);
        });
        cx.run_until_parked();
        assert_eq!(*events.borrow(), vec![DataTableEvent::PageChanged(3)]);

        table.update(cx, |table, cx| {
            table.set_pagination(None);
            table.request_page(1, cx);
        });
        cx.run_until_parked();
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn loading_hides_error_and_rows() {
        let error = SharedString::from("boom");
        assert_eq!(BodyState::resolve(true, Some(&error), 5), BodyState::Loading);
        assert_eq!(BodyState::resolve(true, None, 0), BodyState::Loading);
    }

    #[test]
    fn error_hides_rows() {
        let error = SharedString::from("X");
        assert_eq!(
            BodyState::resolve(false, Some(&error), 3),
            BodyState::Error("X".into())
        );
    }

    #[test]
    fn no_rows_shows_empty_state() {
        assert_eq!(BodyState::resolve(false, None, 0), BodyState::Empty);
        assert_eq!(BodyState::resolve(false, None, 1), BodyState::Rows);
    }

    #[test]
    fn default_empty_label_is_generic() {
        assert_eq!(TableLabels::default().empty.as_ref(), "No data");
    }
}
