//! DataTable Component
//!
//! A generic table over [`Record`](crate::domain::record::Record) rows with
//! single-column sorting, debounced per-column filters and pagination.

pub mod column;
pub mod data_table;
pub mod filter;
pub mod pagination;
pub mod row_key;
pub mod sort;

pub use column::{CellContent, Column, ColumnWidth};
pub use data_table::{BodyState, DataTable, DataTableEvent, TableLabels};
pub use pagination::{PageState, Pagination};
pub use sort::{SortOrder, SortState};
