//! TableQueryState - Caller-Side State of One Records Table
//!
//! Owns the page, sort and committed filters of a table and decides which
//! responses are still wanted.

use std::collections::BTreeMap;

use crate::components::composite::data_table::pagination::PageState;
use crate::components::composite::data_table::sort::SortState;
use crate::domain::record::Record;
use crate::error::Result;
use crate::services::{PageSlice, TableQuery};

/// What the owner should do after a response arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A newer request is in flight; the response was dropped
    Stale,
    /// Rows or error were applied
    Applied,
    /// The page no longer exists; request again for the clamped page
    Reload,
}

#[derive(Debug, Clone)]
pub struct TableQueryState<R> {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub sort: SortState,
    pub filters: BTreeMap<String, String>,
    pub rows: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
}

impl<R: Record> TableQueryState<R> {
    pub fn new(limit: usize) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
            sort: SortState::default(),
            filters: BTreeMap::new(),
            rows: Vec::new(),
            loading: false,
            error: None,
            seq: 0,
        }
    }

    pub fn last_page(&self) -> usize {
        self.total.div_ceil(self.limit).max(1)
    }

    /// Position handed to the table footer
    pub fn page_state(&self) -> PageState {
        PageState::new(self.page, self.limit, self.total)
    }

    /// Move to a page; pages outside the known range are ignored
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.last_page() || page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Replace the sort and go back to the first page
    pub fn set_sort(&mut self, sort: SortState) -> bool {
        if self.sort == sort {
            return false;
        }
        self.sort = sort;
        self.page = 1;
        true
    }

    /// Set or clear one filter and go back to the first page
    pub fn set_filter(&mut self, field: &str, value: &str) -> bool {
        let changed = if value.trim().is_empty() {
            self.filters.remove(field).is_some()
        } else if self.filters.get(field).map(String::as_str) == Some(value) {
            false
        } else {
            self.filters.insert(field.to_string(), value.to_string());
            true
        };

        if changed {
            self.page = 1;
        }
        changed
    }

    /// Start a request; earlier in-flight requests become stale
    pub fn begin_request(&mut self) -> (u64, TableQuery) {
        self.seq += 1;
        self.loading = true;
        let query = TableQuery {
            page: self.page,
            limit: self.limit,
            sort: self.sort.field.is_some().then(|| self.sort.clone()),
            filters: self.filters.clone(),
        };
        (self.seq, query)
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq
    }

    /// Apply the response of request `seq`
    pub fn finish_request(&mut self, seq: u64, response: Result<PageSlice<R>>) -> RequestOutcome {
        if !self.is_current(seq) {
            tracing::debug!(seq, current = self.seq, "Dropping stale table response");
            return RequestOutcome::Stale;
        }

        match response {
            Ok(slice) => {
                self.total = slice.total;
                let last = slice.last_page(self.limit);
                if self.page > last {
                    self.page = last;
                    return RequestOutcome::Reload;
                }
                self.rows = slice.rows;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Table query failed");
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
        RequestOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::sort::SortOrder;
    use crate::domain::record::FieldValue;
    use crate::error::Error;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32);

    impl Record for Row {
        const FIELDS: &'static [&'static str] = &["n"];

        fn id(&self) -> Option<&str> {
            None
        }

        fn field(&self, key: &str) -> Option<FieldValue> {
            (key == "n").then(|| self.0.into())
        }
    }

    fn slice(rows: &[u32], total: usize) -> Result<PageSlice<Row>> {
        Ok(PageSlice {
            rows: rows.iter().copied().map(Row).collect(),
            total,
        })
    }

    fn loaded(total: usize) -> TableQueryState<Row> {
        let mut state = TableQueryState::new(10);
        let (seq, _) = state.begin_request();
        state.finish_request(seq, slice(&[1], total));
        state
    }

    #[test]
    fn sort_change_returns_to_first_page() {
        let mut state = loaded(45);
        assert!(state.set_page(3));
        assert!(state.set_sort(SortState::new("n", SortOrder::Descending)));
        assert_eq!(state.page, 1);
        assert!(!state.set_sort(SortState::new("n", SortOrder::Descending)));
    }

    #[test]
    fn filter_change_returns_to_first_page_and_empty_removes() {
        let mut state = loaded(45);
        state.set_page(4);
        assert!(state.set_filter("n", "1"));
        assert_eq!(state.page, 1);
        assert_eq!(state.filters.get("n").map(String::as_str), Some("1"));

        assert!(!state.set_filter("n", "1"));
        assert!(state.set_filter("n", ""));
        assert!(state.filters.is_empty());
        assert!(!state.set_filter("n", "  "));
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let mut state = loaded(45);
        assert!(!state.set_page(0));
        assert!(!state.set_page(6));
        assert!(!state.set_page(1));
        assert!(state.set_page(5));
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut state = TableQueryState::<Row>::new(10);
        let (first, _) = state.begin_request();
        let (second, _) = state.begin_request();

        assert_eq!(state.finish_request(first, slice(&[1], 1)), RequestOutcome::Stale);
        assert!(state.loading);
        assert!(state.rows.is_empty());

        assert_eq!(state.finish_request(second, slice(&[2], 1)), RequestOutcome::Applied);
        assert!(!state.loading);
        assert_eq!(state.rows, vec![Row(2)]);
    }

    #[test]
    fn shrunken_result_clamps_to_last_page() {
        let mut state = loaded(45);
        state.set_page(5);
        let (seq, query) = state.begin_request();
        assert_eq!(query.page, 5);

        // Data shrank to 12 rows while the request was in flight
        assert_eq!(state.finish_request(seq, slice(&[], 12)), RequestOutcome::Reload);
        assert_eq!(state.page, 2);
        assert!(state.loading);

        let (seq, query) = state.begin_request();
        assert_eq!(query.page, 2);
        assert_eq!(state.finish_request(seq, slice(&[11, 12], 12)), RequestOutcome::Applied);
    }

    #[test]
    fn errors_are_kept_as_text() {
        let mut state = TableQueryState::<Row>::new(10);
        let (seq, _) = state.begin_request();
        let outcome = state.finish_request(
            seq,
            Err(Error::Invalid {
                message: "unknown sort field 'salary'".to_string(),
            }),
        );
        assert_eq!(outcome, RequestOutcome::Applied);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Invalid: unknown sort field 'salary'"));
    }

    #[test]
    fn unsorted_state_sends_no_sort() {
        let mut state = TableQueryState::<Row>::new(0);
        assert_eq!(state.limit, 1);
        let (_, query) = state.begin_request();
        assert_eq!(query.sort, None);
    }
}
