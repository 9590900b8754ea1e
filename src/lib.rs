//! Exam Admin Client Library
//!
//! A role-based administration console for school exams: streams,
//! subjects, students and exams listed in paged, sortable and filterable
//! data tables.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
