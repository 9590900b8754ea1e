//! Seed Data
//!
//! Deterministic sample records for the in-memory stores.

use chrono::{Days, NaiveDate};

use crate::domain::exam::{Exam, ExamStatus};
use crate::domain::stream::Stream;
use crate::domain::student::Student;
use crate::domain::subject::Subject;

const STREAMS: &[(&str, &str, &str, bool)] = &[
    ("Science", "SCI", "Physics, chemistry and biology track", true),
    ("Commerce", "COM", "Accounting and business studies", true),
    ("Arts", "ART", "Languages, history and fine arts", true),
    ("Vocational", "VOC", "", false),
];

const SUBJECTS: &[(&str, &str, &str, u32)] = &[
    ("Physics", "PHY", "Science", 4),
    ("Chemistry", "CHE", "Science", 4),
    ("Biology", "BIO", "Science", 4),
    ("Mathematics", "MAT", "Science", 5),
    ("Computer Science", "CSC", "Science", 3),
    ("Accountancy", "ACC", "Commerce", 4),
    ("Business Studies", "BST", "Commerce", 3),
    ("Economics", "ECO", "Commerce", 4),
    ("Statistics", "STA", "Commerce", 3),
    ("History", "HIS", "Arts", 3),
    ("Geography", "GEO", "Arts", 3),
    ("Political Science", "POL", "Arts", 3),
    ("Fine Arts", "FAR", "Arts", 2),
    ("English", "ENG", "Arts", 4),
    ("Carpentry", "CAR", "Vocational", 2),
];

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Beatriz", "Chen", "Divya", "Emeka", "Farah", "Gustavo", "Hana", "Ivan", "Jia",
    "Kofi", "Lena", "Mateo", "Nadia", "Omar", "Priya",
];

const LAST_NAMES: &[&str] = &["Sharma", "Okafor", "Lindqvist"];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

fn after(base: NaiveDate, days: u64) -> NaiveDate {
    base.checked_add_days(Days::new(days)).unwrap_or(base)
}

pub fn streams() -> Vec<Stream> {
    STREAMS
        .iter()
        .enumerate()
        .map(|(i, (name, code, description, active))| Stream {
            id: format!("str-{}", i + 1),
            name: (*name).to_string(),
            code: (*code).to_string(),
            description: (*description).to_string(),
            active: *active,
        })
        .collect()
}

pub fn subjects() -> Vec<Subject> {
    SUBJECTS
        .iter()
        .enumerate()
        .map(|(i, (name, code, stream, credits))| Subject {
            id: format!("sub-{:02}", i + 1),
            name: (*name).to_string(),
            code: (*code).to_string(),
            stream: (*stream).to_string(),
            credits: *credits,
        })
        .collect()
}

pub fn students() -> Vec<Student> {
    let enrolment_start = date(2023, 7, 1);
    let streams = ["Science", "Commerce", "Arts"];

    LAST_NAMES
        .iter()
        .flat_map(|last| FIRST_NAMES.iter().map(move |first| (*first, *last)))
        .enumerate()
        .map(|(i, (first, last))| {
            let roll_no = 1001 + i as u32;
            Student {
                id: format!("stu-{roll_no}"),
                name: format!("{first} {last}"),
                roll_no,
                stream: streams[i % streams.len()].to_string(),
                // Every fifth student has no email on file
                email: (i % 5 != 4).then(|| {
                    format!("{}.{}@school.example", first.to_lowercase(), last.to_lowercase())
                }),
                guardian_phone: (i % 3 != 2).then(|| format!("+1-555-01{:02}", i % 100)),
                enrolled_on: after(enrolment_start, (i as u64 * 7) % 365),
            }
        })
        .collect()
}

pub fn exams() -> Vec<Exam> {
    let term_start = date(2024, 9, 2);
    let terms = ["Unit Test 1", "Midterm", "Unit Test 2", "Final"];

    terms
        .iter()
        .enumerate()
        .flat_map(|(t, term)| {
            SUBJECTS
                .iter()
                .take(8)
                .enumerate()
                .map(move |(s, (subject, _, stream, _))| (t, s, *term, *subject, *stream))
        })
        .enumerate()
        .map(|(i, (t, s, term, subject, stream))| {
            let status = match t {
                0 => ExamStatus::Completed,
                1 if s % 2 == 0 => ExamStatus::Completed,
                1 => ExamStatus::Ongoing,
                2 => ExamStatus::Scheduled,
                _ => ExamStatus::Draft,
            };
            let is_unit_test = t % 2 == 0;
            Exam {
                id: format!("exm-{:03}", i + 1),
                title: format!("{subject} {term}"),
                subject: subject.to_string(),
                stream: stream.to_string(),
                scheduled_on: after(term_start, (t as u64) * 45 + s as u64),
                duration_minutes: if is_unit_test { 60 } else { 180 },
                max_marks: if is_unit_test { 25 } else { 100 },
                status,
            }
        })
        .collect()
}
