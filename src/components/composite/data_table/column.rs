//! Column Definition
//!
//! Defines table columns with their properties and cell renderers.

use gpui::{Rgba, SharedString};

use crate::domain::record::{FieldValue, Record};

/// What a cell displays
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Missing value
    Blank,
    Text(SharedString),
    /// Short colored label, e.g. a status
    Badge { text: SharedString, color: Rgba },
}

impl CellContent {
    pub fn text(&self) -> Option<&str> {
        match self {
            CellContent::Blank => None,
            CellContent::Text(text) | CellContent::Badge { text, .. } => Some(text.as_ref()),
        }
    }
}

impl From<Option<&FieldValue>> for CellContent {
    fn from(value: Option<&FieldValue>) -> Self {
        match value {
            Some(value) => CellContent::Text(value.to_string().into()),
            None => CellContent::Blank,
        }
    }
}

/// Custom cell renderer; receives the field value (if any) and the whole row
pub type CellRenderer<R> = Box<dyn Fn(Option<&FieldValue>, &R) -> CellContent + 'static>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Field key, unique within the table
    pub key: SharedString,
    /// Column header label
    pub label: SharedString,
    /// Column width (in pixels, or flexible)
    pub width: ColumnWidth,
    /// Whether clicking the header requests a sort
    pub sortable: bool,
    /// Whether the header carries a filter input
    pub filterable: bool,
    render: Option<CellRenderer<R>>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl<R: Record> Column<R> {
    /// Create a new column showing the raw field value
    pub fn new(key: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            width: ColumnWidth::default(),
            sortable: false,
            filterable: false,
            render: None,
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Give the column a filter input
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Replace the raw value display with a custom renderer
    pub fn render(
        mut self,
        render: impl Fn(Option<&FieldValue>, &R) -> CellContent + 'static,
    ) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Content of this column's cell for `row`
    pub fn cell(&self, row: &R) -> CellContent {
        let value = row.field(&self.key);
        match &self.render {
            Some(render) => render(value.as_ref(), row),
            None => CellContent::from(value.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Person {
        id: Option<String>,
        name: String,
    }

    impl Record for Person {
        const FIELDS: &'static [&'static str] = &["id", "name"];

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn field(&self, key: &str) -> Option<FieldValue> {
            match key {
                "id" => self.id.as_deref().map(FieldValue::from),
                "name" => Some(self.name.as_str().into()),
                _ => None,
            }
        }
    }

    fn ann() -> Person {
        Person {
            id: Some("r1".to_string()),
            name: "Ann".to_string(),
        }
    }

    #[test]
    fn identity_renderer_shows_field_value() {
        let column = Column::<Person>::new("name", "Name").render(|value, _row| value.into());
        assert_eq!(column.cell(&ann()).text(), Some("Ann"));
    }

    #[test]
    fn raw_value_is_used_without_renderer() {
        let column = Column::<Person>::new("name", "Name");
        assert_eq!(column.cell(&ann()), CellContent::Text("Ann".into()));
    }

    #[test]
    fn missing_field_renders_blank() {
        let column = Column::<Person>::new("email", "Email");
        assert_eq!(column.cell(&ann()), CellContent::Blank);

        let anonymous = Person {
            id: None,
            name: "Bo".to_string(),
        };
        assert_eq!(Column::<Person>::new("id", "ID").cell(&anonymous), CellContent::Blank);
    }

    #[test]
    fn renderer_sees_whole_row() {
        let column = Column::<Person>::new("name", "Name")
            .render(|value, row| match (value, row.id()) {
                (Some(value), Some(id)) => CellContent::Text(format!("{value} ({id})").into()),
                _ => CellContent::Blank,
            });
        assert_eq!(column.cell(&ann()).text(), Some("Ann (r1)"));
    }

    #[test]
    fn builder_flags() {
        let column = Column::<Person>::new("name", "Name")
            .sortable()
            .filterable()
            .fixed_width(120.0);
        assert!(column.sortable);
        assert!(column.filterable);
        assert_eq!(column.width, ColumnWidth::Fixed(120.0));
    }
}
