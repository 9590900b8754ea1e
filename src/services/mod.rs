//! Service Layer
//!
//! In-memory record services answering paged, sorted and filtered queries,
//! and the tokio bridge used to await them from GPUI tasks.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                       Catalog                        │
//! │  ┌─────────┐ ┌──────────┐ ┌──────────┐ ┌─────────┐   │
//! │  │ Streams │ │ Subjects │ │ Students │ │  Exams  │   │
//! │  └─────────┘ └──────────┘ └──────────┘ └─────────┘   │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ PageSlice
//! ┌──────────────────────────────────────────────────────┐
//! │             TableQueryState (per page)               │
//! └──────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod record_store;
mod runtime;
mod seed;

pub use catalog::*;
pub use record_store::*;
pub use runtime::*;
