//! Subject - Subjects Taught Within a Stream

use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};

/// A subject offered by a stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub code: String,
    /// Name of the owning stream
    pub stream: String,
    /// Credit weight used when aggregating results
    pub credits: u32,
}

impl Record for Subject {
    const FIELDS: &'static [&'static str] = &["id", "name", "code", "stream", "credits"];

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "code" => Some(self.code.as_str().into()),
            "stream" => Some(self.stream.as_str().into()),
            "credits" => Some(self.credits.into()),
            _ => None,
        }
    }
}
