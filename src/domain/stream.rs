//! Stream - Academic Streams

use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};

/// An academic stream (e.g. Science, Commerce) that groups subjects and students
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    /// Unique ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Short code used on reports
    pub code: String,
    /// Free-form description
    pub description: String,
    /// Whether new students can enrol
    pub active: bool,
}

impl Record for Stream {
    const FIELDS: &'static [&'static str] = &["id", "name", "code", "description", "active"];

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "code" => Some(self.code.as_str().into()),
            "description" if !self.description.is_empty() => {
                Some(self.description.as_str().into())
            }
            "active" => Some(self.active.into()),
            _ => None,
        }
    }
}
