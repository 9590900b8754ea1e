//! Records Controller
//!
//! Runs table queries against the record store of one record type.

use std::sync::Arc;

use crate::error::Result;
use crate::services::{Catalog, CatalogRecord, PageSlice, RecordStore, TableQuery, run_in_tokio};

/// Records page controller
pub struct RecordsController<R: CatalogRecord> {
    store: Arc<RecordStore<R>>,
}

impl<R: CatalogRecord> RecordsController<R> {
    /// Create a new controller
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            store: R::store(catalog),
        }
    }

    /// Fetch one page on the tokio runtime
    pub async fn fetch(store: Arc<RecordStore<R>>, seq: u64, query: TableQuery) -> Result<PageSlice<R>> {
        tracing::debug!(store = store.name(), seq, page = query.page, "Fetching records");
        let result = run_in_tokio(store.query(query)).await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, seq, "Record query failed");
        }
        result
    }

    pub fn store(&self) -> Arc<RecordStore<R>> {
        self.store.clone()
    }
}
