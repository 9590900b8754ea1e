//! Student - Enrolled Students

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};

/// An enrolled student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Roll number, unique within the school
    pub roll_no: u32,
    /// Name of the stream the student is enrolled in
    pub stream: String,
    /// Contact e-mail (optional)
    pub email: Option<String>,
    /// Guardian phone number (optional)
    pub guardian_phone: Option<String>,
    /// Enrolment date
    pub enrolled_on: NaiveDate,
}

impl Record for Student {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "roll_no",
        "stream",
        "email",
        "guardian_phone",
        "enrolled_on",
    ];

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "roll_no" => Some(self.roll_no.into()),
            "stream" => Some(self.stream.as_str().into()),
            "email" => self.email.as_deref().map(FieldValue::from),
            "guardian_phone" => self.guardian_phone.as_deref().map(FieldValue::from),
            "enrolled_on" => Some(self.enrolled_on.into()),
            _ => None,
        }
    }
}
