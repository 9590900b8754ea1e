//! NavigationState - Active Page Within a Role Layout

use crate::app::navigation::{ActivePage, RoleLayout};

/// State for sidebar navigation
#[derive(Debug)]
pub struct NavigationState {
    layout: RoleLayout,
    /// Currently active page, always one the layout allows
    pub active_page: ActivePage,
}

impl NavigationState {
    pub fn new(layout: RoleLayout) -> Self {
        let active_page = layout.home();
        Self {
            layout,
            active_page,
        }
    }

    pub fn layout(&self) -> &RoleLayout {
        &self.layout
    }

    /// Set the active page (from sidebar click); pages outside the layout are refused
    pub fn set_active_page(&mut self, page: ActivePage) -> bool {
        if !self.layout.allows(page) {
            tracing::warn!(?page, role = ?self.layout.role(), "Page not available for role");
            return false;
        }
        if self.active_page == page {
            return false;
        }
        self.active_page = page;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::role::Role;

    #[test]
    fn starts_on_layout_home() {
        let state = NavigationState::new(RoleLayout::for_role(Role::Student));
        assert_eq!(state.active_page, ActivePage::Dashboard);
    }

    #[test]
    fn refuses_pages_outside_layout() {
        let mut state = NavigationState::new(RoleLayout::for_role(Role::Parent));
        assert!(!state.set_active_page(ActivePage::Students));
        assert_eq!(state.active_page, ActivePage::Dashboard);
        assert!(state.set_active_page(ActivePage::Exams));
        assert!(!state.set_active_page(ActivePage::Exams));
    }
}
