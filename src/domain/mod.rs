//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the school domain.

pub mod config;
pub mod exam;
pub mod record;
pub mod role;
pub mod stream;
pub mod student;
pub mod subject;
