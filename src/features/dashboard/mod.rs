//! Dashboard Feature

pub mod page;
