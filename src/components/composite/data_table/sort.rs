//! Sort State
//!
//! Single-column sort state and the header-click toggle.

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Header indicator for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Sortable but not the active field
    Neutral,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn glyph(&self) -> &'static str {
        match self {
            SortIndicator::Neutral => "↕",
            SortIndicator::Ascending => "↑",
            SortIndicator::Descending => "↓",
        }
    }
}

/// Active sort field and direction; `field == None` means unsorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub field: Option<String>,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: Some(field.into()),
            order,
        }
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    /// State after clicking the header of `field`.
    ///
    /// The active field flips its order; any other field becomes active in
    /// ascending order.
    pub fn toggle(&self, field: &str) -> SortState {
        if self.is_active(field) {
            SortState {
                field: self.field.clone(),
                order: self.order.toggled(),
            }
        } else {
            SortState::new(field, SortOrder::Ascending)
        }
    }

    /// Header click outcome; non-sortable columns never change the sort
    pub fn click(&self, field: &str, sortable: bool) -> Option<SortState> {
        sortable.then(|| self.toggle(field))
    }

    pub fn indicator(&self, field: &str) -> SortIndicator {
        if !self.is_active(field) {
            return SortIndicator::Neutral;
        }
        match self.order {
            SortOrder::Ascending => SortIndicator::Ascending,
            SortOrder::Descending => SortIndicator::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_inactive_column_sorts_ascending() {
        let state = SortState::new("name", SortOrder::Descending);
        let next = state.toggle("roll_no");
        assert_eq!(next, SortState::new("roll_no", SortOrder::Ascending));
    }

    #[test]
    fn clicking_active_column_flips_order() {
        let state = SortState::new("name", SortOrder::Ascending);
        let next = state.toggle("name");
        assert_eq!(next.order, SortOrder::Descending);
        assert_eq!(next.toggle("name").order, SortOrder::Ascending);
    }

    #[test]
    fn unsorted_state_activates_clicked_field() {
        let next = SortState::default().toggle("stream");
        assert_eq!(next.field.as_deref(), Some("stream"));
        assert_eq!(next.order, SortOrder::Ascending);
    }

    #[test]
    fn non_sortable_click_produces_nothing() {
        let state = SortState::new("name", SortOrder::Ascending);
        assert_eq!(state.click("email", false), None);
        assert_eq!(state.click("name", true), Some(state.toggle("name")));
    }

    #[test]
    fn indicator_reflects_active_field_only() {
        let state = SortState::new("name", SortOrder::Descending);
        assert_eq!(state.indicator("name"), SortIndicator::Descending);
        assert_eq!(state.indicator("stream"), SortIndicator::Neutral);
        assert_eq!(SortState::default().indicator("name"), SortIndicator::Neutral);
    }
}
