//! Catalog - The Record Stores of the Application

use std::sync::Arc;
use std::time::Duration;

use super::record_store::RecordStore;
use super::seed;
use crate::domain::exam::Exam;
use crate::domain::record::Record;
use crate::domain::stream::Stream;
use crate::domain::student::Student;
use crate::domain::subject::Subject;

/// All record stores, cheap to clone
#[derive(Clone)]
pub struct Catalog {
    pub streams: Arc<RecordStore<Stream>>,
    pub subjects: Arc<RecordStore<Subject>>,
    pub students: Arc<RecordStore<Student>>,
    pub exams: Arc<RecordStore<Exam>>,
}

impl Catalog {
    /// Stores filled with the sample school
    pub fn seeded(latency: Duration) -> Self {
        let catalog = Self {
            streams: Arc::new(RecordStore::new("streams", seed::streams()).with_latency(latency)),
            subjects: Arc::new(RecordStore::new("subjects", seed::subjects()).with_latency(latency)),
            students: Arc::new(RecordStore::new("students", seed::students()).with_latency(latency)),
            exams: Arc::new(RecordStore::new("exams", seed::exams()).with_latency(latency)),
        };

        tracing::info!(
            streams = catalog.streams.len(),
            subjects = catalog.subjects.len(),
            students = catalog.students.len(),
            exams = catalog.exams.len(),
            latency_ms = latency.as_millis() as u64,
            "Record catalog seeded"
        );

        catalog
    }
}

/// Record types that live in the catalog
pub trait CatalogRecord: Record {
    fn store(catalog: &Catalog) -> Arc<RecordStore<Self>>;
}

impl CatalogRecord for Stream {
    fn store(catalog: &Catalog) -> Arc<RecordStore<Self>> {
        catalog.streams.clone()
    }
}

impl CatalogRecord for Subject {
    fn store(catalog: &Catalog) -> Arc<RecordStore<Self>> {
        catalog.subjects.clone()
    }
}

impl CatalogRecord for Student {
    fn store(catalog: &Catalog) -> Arc<RecordStore<Self>> {
        catalog.students.clone()
    }
}

impl CatalogRecord for Exam {
    fn store(catalog: &Catalog) -> Arc<RecordStore<Self>> {
        catalog.exams.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_are_shared_between_clones() {
        let catalog = Catalog::seeded(Duration::ZERO);
        let copy = catalog.clone();
        assert!(Arc::ptr_eq(&catalog.students, &copy.students));
        assert!(Arc::ptr_eq(&Student::store(&catalog), &catalog.students));
        assert_eq!(Exam::store(&copy).name(), "exams");
    }
}
