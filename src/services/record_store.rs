//! RecordStore - In-Memory Record Service
//!
//! Answers paged queries over a set of records the way a list endpoint
//! would: filter, then sort, then slice.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::components::composite::data_table::sort::{SortOrder, SortState};
use crate::domain::record::Record;
use crate::error::{Error, Result};

/// One page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    /// 1-based page number
    pub page: usize,
    pub limit: usize,
    pub sort: Option<SortState>,
    /// Field key -> needle; all must match
    pub filters: BTreeMap<String, String>,
}

impl TableQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            sort: None,
            filters: BTreeMap::new(),
        }
    }

    fn validate<R: Record>(&self) -> Result<()> {
        if self.page == 0 || self.limit == 0 {
            return Err(Error::Invalid {
                message: format!("page {} / limit {} must be at least 1", self.page, self.limit),
            });
        }
        if let Some(field) = self.sort.as_ref().and_then(|s| s.field.as_deref()) {
            if !R::has_field(field) {
                return Err(Error::Invalid {
                    message: format!("unknown sort field '{field}'"),
                });
            }
        }
        if let Some(field) = self.filters.keys().find(|f| !R::has_field(f)) {
            return Err(Error::Invalid {
                message: format!("unknown filter field '{field}'"),
            });
        }
        Ok(())
    }
}

/// Rows of one page and the number of rows matching the query
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<R> {
    pub rows: Vec<R>,
    pub total: usize,
}

impl<R> PageSlice<R> {
    /// Last page for a page size; 1 when nothing matched
    pub fn last_page(&self, limit: usize) -> usize {
        self.total.div_ceil(limit.max(1)).max(1)
    }
}

/// Read-only records of one type
pub struct RecordStore<R: Record> {
    name: &'static str,
    records: Vec<R>,
    latency: Duration,
}

impl<R: Record> RecordStore<R> {
    pub fn new(name: &'static str, records: Vec<R>) -> Self {
        Self {
            name,
            records,
            latency: Duration::ZERO,
        }
    }

    /// Delay every query by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run a query after the configured latency
    pub async fn query(self: Arc<Self>, query: TableQuery) -> Result<PageSlice<R>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.query_now(&query)
    }

    /// Run a query without delay
    pub fn query_now(&self, query: &TableQuery) -> Result<PageSlice<R>> {
        query.validate::<R>()?;

        let mut matched: Vec<&R> = self
            .records
            .iter()
            .filter(|record| {
                query.filters.iter().all(|(field, needle)| {
                    needle.trim().is_empty()
                        || record.field(field).is_some_and(|value| value.matches(needle))
                })
            })
            .collect();

        if let Some(sort) = &query.sort {
            if let Some(field) = sort.field.as_deref() {
                matched.sort_by(|a, b| compare_field(*a, *b, field, sort.order));
            }
        }

        let total = matched.len();
        let rows: Vec<R> = matched
            .into_iter()
            .skip((query.page - 1).saturating_mul(query.limit))
            .take(query.limit)
            .cloned()
            .collect();

        tracing::debug!(
            store = self.name,
            page = query.page,
            limit = query.limit,
            total,
            returned = rows.len(),
            "Record query answered"
        );

        Ok(PageSlice { rows, total })
    }
}

/// Compare two records by a field; records without the field sort last in
/// either direction
fn compare_field<R: Record>(a: &R, b: &R, field: &str, order: SortOrder) -> Ordering {
    match (a.field(field), b.field(field)) {
        (Some(a), Some(b)) => match order {
            SortOrder::Ascending => a.cmp(&b),
            SortOrder::Descending => b.cmp(&a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::FieldValue;
    use crate::services::block_on;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        name: &'static str,
        rank: Option<i64>,
    }

    impl Record for Item {
        const FIELDS: &'static [&'static str] = &["id", "name", "rank"];

        fn id(&self) -> Option<&str> {
            Some(self.id)
        }

        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "id" => Some(self.id.into()),
                "name" => Some(self.name.into()),
                "rank" => self.rank.map(FieldValue::from),
                _ => None,
            }
        }
    }

    fn store() -> RecordStore<Item> {
        RecordStore::new(
            "items",
            vec![
                Item { id: "1", name: "Physics", rank: Some(3) },
                Item { id: "2", name: "chemistry", rank: None },
                Item { id: "3", name: "Biology", rank: Some(1) },
                Item { id: "4", name: "Physical Education", rank: Some(2) },
                Item { id: "5", name: "Accounting", rank: None },
            ],
        )
    }

    fn ids(slice: &PageSlice<Item>) -> Vec<&'static str> {
        slice.rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn pages_are_sliced_from_the_filtered_set() {
        let store = store();
        let first = store.query_now(&TableQuery::new(1, 2)).expect("query");
        assert_eq!(ids(&first), vec!["1", "2"]);
        assert_eq!(first.total, 5);

        let last = store.query_now(&TableQuery::new(3, 2)).expect("query");
        assert_eq!(ids(&last), vec!["5"]);

        let beyond = store.query_now(&TableQuery::new(4, 2)).expect("query");
        assert!(beyond.rows.is_empty());
        assert_eq!(beyond.total, 5);
        assert_eq!(beyond.last_page(2), 3);
    }

    #[test]
    fn filters_are_case_insensitive_substrings() {
        let mut query = TableQuery::new(1, 10);
        query.filters.insert("name".into(), "PHYS".into());
        let slice = store().query_now(&query).expect("query");
        assert_eq!(ids(&slice), vec!["1", "4"]);
        assert_eq!(slice.total, 2);
    }

    #[test]
    fn all_filters_must_match_and_blank_filters_are_ignored() {
        let mut query = TableQuery::new(1, 10);
        query.filters.insert("name".into(), "phys".into());
        query.filters.insert("rank".into(), "2".into());
        assert_eq!(ids(&store().query_now(&query).expect("query")), vec!["4"]);

        let mut query = TableQuery::new(1, 10);
        query.filters.insert("name".into(), "   ".into());
        assert_eq!(store().query_now(&query).expect("query").total, 5);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let mut query = TableQuery::new(1, 10);
        query.sort = Some(SortState::new("rank", SortOrder::Ascending));
        assert_eq!(
            ids(&store().query_now(&query).expect("query")),
            vec!["3", "4", "1", "2", "5"]
        );

        query.sort = Some(SortState::new("rank", SortOrder::Descending));
        assert_eq!(
            ids(&store().query_now(&query).expect("query")),
            vec!["1", "4", "3", "2", "5"]
        );
    }

    #[test]
    fn text_sort_ignores_case() {
        let mut query = TableQuery::new(1, 10);
        query.sort = Some(SortState::new("name", SortOrder::Ascending));
        assert_eq!(
            ids(&store().query_now(&query).expect("query")),
            vec!["5", "3", "2", "4", "1"]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut query = TableQuery::new(1, 10);
        query.sort = Some(SortState::new("salary", SortOrder::Ascending));
        assert!(matches!(store().query_now(&query), Err(Error::Invalid { .. })));

        let mut query = TableQuery::new(1, 10);
        query.filters.insert("salary".into(), "1".into());
        assert!(matches!(store().query_now(&query), Err(Error::Invalid { .. })));

        assert!(store().query_now(&TableQuery::new(0, 10)).is_err());
    }

    #[test]
    fn async_query_waits_for_latency() {
        let store = Arc::new(store().with_latency(Duration::from_millis(20)));
        let started = std::time::Instant::now();
        let slice = block_on(store.clone().query(TableQuery::new(1, 10))).expect("query");
        assert_eq!(slice.total, 5);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
