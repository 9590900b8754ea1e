//! Record Columns
//!
//! Table columns of every record type, labelled for a locale.

use crate::app::navigation::ActivePage;
use crate::components::composite::data_table::column::{CellContent, Column};
use crate::domain::exam::{Exam, ExamStatus};
use crate::domain::stream::Stream;
use crate::domain::student::Student;
use crate::domain::subject::Subject;
use crate::i18n::{Locale, t};
use crate::services::CatalogRecord;
use crate::theme::colors::AdminColors;

/// A catalog record type that can be listed on a records page
pub trait RecordColumns: CatalogRecord {
    /// Sidebar page listing this record type
    const PAGE: ActivePage;

    fn columns(locale: Locale) -> Vec<Column<Self>>;
}

fn yes_no(locale: Locale, value: bool) -> CellContent {
    let (key, color) = if value {
        ("value-yes", AdminColors::success())
    } else {
        ("value-no", AdminColors::text_muted())
    };
    CellContent::Badge {
        text: t(locale, key),
        color,
    }
}

fn status_badge(locale: Locale, status: ExamStatus) -> CellContent {
    let (key, color) = match status {
        ExamStatus::Draft => ("status-draft", AdminColors::text_muted()),
        ExamStatus::Scheduled => ("status-scheduled", AdminColors::info()),
        ExamStatus::Ongoing => ("status-ongoing", AdminColors::warning()),
        ExamStatus::Completed => ("status-completed", AdminColors::success()),
    };
    CellContent::Badge {
        text: t(locale, key),
        color,
    }
}

impl RecordColumns for Stream {
    const PAGE: ActivePage = ActivePage::Streams;

    fn columns(locale: Locale) -> Vec<Column<Self>> {
        vec![
            Column::new("code", t(locale, "col-code"))
                .fixed_width(90.0)
                .sortable()
                .filterable(),
            Column::new("name", t(locale, "col-name"))
                .fixed_width(180.0)
                .sortable()
                .filterable(),
            Column::new("description", t(locale, "col-description"))
                .flex_width(Some(220.0), None)
                .filterable(),
            Column::new("active", t(locale, "col-active"))
                .fixed_width(90.0)
                .sortable()
                .render(move |_, stream: &Stream| yes_no(locale, stream.active)),
        ]
    }
}

impl RecordColumns for Subject {
    const PAGE: ActivePage = ActivePage::Subjects;

    fn columns(locale: Locale) -> Vec<Column<Self>> {
        vec![
            Column::new("code", t(locale, "col-code"))
                .fixed_width(90.0)
                .sortable()
                .filterable(),
            Column::new("name", t(locale, "col-name"))
                .flex_width(Some(200.0), None)
                .sortable()
                .filterable(),
            Column::new("stream", t(locale, "col-stream"))
                .fixed_width(140.0)
                .sortable()
                .filterable(),
            Column::new("credits", t(locale, "col-credits"))
                .fixed_width(90.0)
                .sortable(),
        ]
    }
}

impl RecordColumns for Student {
    const PAGE: ActivePage = ActivePage::Students;

    fn columns(locale: Locale) -> Vec<Column<Self>> {
        vec![
            Column::new("roll_no", t(locale, "col-roll-no"))
                .fixed_width(90.0)
                .sortable()
                .filterable(),
            Column::new("name", t(locale, "col-name"))
                .fixed_width(180.0)
                .sortable()
                .filterable(),
            Column::new("stream", t(locale, "col-stream"))
                .fixed_width(120.0)
                .sortable()
                .filterable(),
            Column::new("email", t(locale, "col-email"))
                .flex_width(Some(220.0), None)
                .filterable(),
            Column::new("guardian_phone", t(locale, "col-guardian-phone"))
                .fixed_width(150.0),
            Column::new("enrolled_on", t(locale, "col-enrolled-on"))
                .fixed_width(120.0)
                .sortable(),
        ]
    }
}

impl RecordColumns for Exam {
    const PAGE: ActivePage = ActivePage::Exams;

    fn columns(locale: Locale) -> Vec<Column<Self>> {
        vec![
            Column::new("title", t(locale, "col-title"))
                .flex_width(Some(220.0), None)
                .sortable()
                .filterable(),
            Column::new("subject", t(locale, "col-subject"))
                .fixed_width(150.0)
                .sortable()
                .filterable(),
            Column::new("scheduled_on", t(locale, "col-scheduled-on"))
                .fixed_width(110.0)
                .sortable(),
            Column::new("duration_minutes", t(locale, "col-duration"))
                .fixed_width(90.0)
                .sortable(),
            Column::new("max_marks", t(locale, "col-max-marks"))
                .fixed_width(90.0)
                .sortable(),
            Column::new("status", t(locale, "col-status"))
                .fixed_width(120.0)
                .sortable()
                .filterable()
                .render(move |_, exam: &Exam| status_badge(locale, exam.status)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use crate::services::Catalog;

    fn keys_are_fields<R: RecordColumns>() {
        for column in R::columns(Locale::EnUS) {
            assert!(R::has_field(&column.key), "unknown column {}", column.key);
        }
    }

    #[test]
    fn every_column_names_a_record_field() {
        keys_are_fields::<Stream>();
        keys_are_fields::<Subject>();
        keys_are_fields::<Student>();
        keys_are_fields::<Exam>();
    }

    #[test]
    fn labels_follow_locale() {
        let en = Exam::columns(Locale::EnUS);
        let zh = Exam::columns(Locale::ZhCN);
        assert_eq!(en[0].label.as_ref(), "Title");
        assert_eq!(zh[0].label.as_ref(), "标题");
    }

    #[test]
    fn missing_email_renders_blank() {
        let catalog = Catalog::seeded(std::time::Duration::ZERO);
        let query = crate::services::TableQuery::new(1, 100);
        let students = catalog.students.query_now(&query).expect("query").rows;
        let without_email = students
            .iter()
            .find(|s| s.email.is_none())
            .expect("seeded student without email");

        let columns = Student::columns(Locale::EnUS);
        let email = columns
            .iter()
            .find(|c| c.key.as_ref() == "email")
            .expect("email column");
        assert_eq!(email.cell(without_email), CellContent::Blank);
    }

    #[test]
    fn exam_status_is_a_translated_badge() {
        let exam = crate::services::Catalog::seeded(std::time::Duration::ZERO)
            .exams
            .query_now(&crate::services::TableQuery::new(1, 1))
            .expect("query")
            .rows
            .remove(0);
        let columns = Exam::columns(Locale::ZhCN);
        let status = columns.last().expect("status column");
        assert!(matches!(status.cell(&exam), CellContent::Badge { .. }));
        assert_eq!(status.cell(&exam).text(), Some("已完成"));
    }
}
