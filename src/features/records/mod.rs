//! Records Feature
//!
//! One page per record type: a data table backed by its record store.

pub mod columns;
pub mod controller;
pub mod page;
