//! Exam - Scheduled Examinations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};

/// Lifecycle of an exam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Draft,
    Scheduled,
    Ongoing,
    Completed,
}

impl ExamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExamStatus::Draft => "Draft",
            ExamStatus::Scheduled => "Scheduled",
            ExamStatus::Ongoing => "Ongoing",
            ExamStatus::Completed => "Completed",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Draft" => Some(ExamStatus::Draft),
            "Scheduled" => Some(ExamStatus::Scheduled),
            "Ongoing" => Some(ExamStatus::Ongoing),
            "Completed" => Some(ExamStatus::Completed),
            _ => None,
        }
    }
}

/// An exam for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub title: String,
    /// Subject name
    pub subject: String,
    /// Stream name
    pub stream: String,
    pub scheduled_on: NaiveDate,
    pub duration_minutes: u32,
    pub max_marks: u32,
    pub status: ExamStatus,
}

impl Record for Exam {
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "subject",
        "stream",
        "scheduled_on",
        "duration_minutes",
        "max_marks",
        "status",
    ];

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn field(&self, key: &str) -> Option<FieldValue> {
        match key {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "subject" => Some(self.subject.as_str().into()),
            "stream" => Some(self.stream.as_str().into()),
            "scheduled_on" => Some(self.scheduled_on.into()),
            "duration_minutes" => Some(self.duration_minutes.into()),
            "max_marks" => Some(self.max_marks.into()),
            "status" => Some(self.status.label().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_label_round_trips() {
        for status in [
            ExamStatus::Draft,
            ExamStatus::Scheduled,
            ExamStatus::Ongoing,
            ExamStatus::Completed,
        ] {
            assert_eq!(ExamStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(ExamStatus::from_label("Cancelled"), None);
    }
}
