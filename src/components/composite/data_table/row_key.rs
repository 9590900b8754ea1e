//! Row identity
//!
//! Rows are keyed by their record id, falling back to their position on the
//! page for records without one.

use gpui::{ElementId, SharedString};

use crate::domain::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(SharedString),
    Index(usize),
}

impl RowKey {
    pub fn for_row<R: Record>(row: &R, index: usize) -> Self {
        match row.id() {
            Some(id) => RowKey::Id(SharedString::from(id.to_string())),
            None => RowKey::Index(index),
        }
    }

    pub fn element_id(&self) -> ElementId {
        match self {
            RowKey::Id(id) => ElementId::Name(format!("row-{id}").into()),
            RowKey::Index(index) => ElementId::from(("row", *index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::FieldValue;

    #[derive(Clone)]
    struct Line(Option<&'static str>);

    impl Record for Line {
        const FIELDS: &'static [&'static str] = &[];

        fn id(&self) -> Option<&str> {
            self.0
        }

        fn field(&self, _key: &str) -> Option<FieldValue> {
            None
        }
    }

    #[test]
    fn id_wins_over_position() {
        assert_eq!(RowKey::for_row(&Line(Some("s-1")), 4), RowKey::Id("s-1".into()));
        assert_eq!(RowKey::for_row(&Line(None), 4), RowKey::Index(4));
    }

    #[test]
    fn key_is_stable_across_renders() {
        let rows = [Line(Some("a")), Line(None), Line(Some("c"))];
        let first: Vec<RowKey> = rows.iter().enumerate().map(|(i, r)| RowKey::for_row(r, i)).collect();
        let second: Vec<RowKey> = rows.iter().enumerate().map(|(i, r)| RowKey::for_row(r, i)).collect();
        assert_eq!(first, second);
    }
}
